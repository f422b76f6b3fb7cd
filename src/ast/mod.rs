/*
*                    PL/0 front-end -- abstract syntax tree.
*
* program    = block "." ;
* block      = [ "const" ident "=" number { "," ident "=" number } ";" ]
*              [ "var" ident { "," ident } ";" ]
*              { "procedure" ident ";" block ";" } statement ;
* statement  = [ ident ":=" expression
*              | "call" ident
*              | "begin" statement { ";" statement } "end"
*              | "if" condition "then" statement [ "else" statement ]
*              | "while" condition "do" statement
*              | "read" ident
*              | "write" ident ] ;
* condition  = "odd" expression | expression comparator expression ;
* expression = [ "+" | "-" ] term { ( "+" | "-" ) term } ;
* term       = factor { ( "*" | "/" ) factor } ;
* factor     = ident | number | "(" expression ")" ;
* comparator = "=" | "<>" | "<" | "<=" | ">" | ">=" ;
*/

mod declarations;
mod expressions;
pub mod printer;
mod program;
mod statements;
pub mod visitor;

pub use declarations::{ConstDeclaration, ProcedureDeclaration, VarDeclaration};
pub use expressions::{BinaryOp, Condition, Expression, RelationalOp, UnaryOp};
pub use program::{Block, Program};
pub use statements::Statement;
pub use visitor::{NodeCounter, Visitor};
