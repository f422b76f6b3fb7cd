use pl0_frontend::ast::printer::to_sexpr;
use pl0_frontend::ast::{
    BinaryOp, Block, Condition, ConstDeclaration, Expression, NodeCounter, ProcedureDeclaration,
    Program, RelationalOp, Statement, UnaryOp, VarDeclaration, Visitor,
};
use pl0_frontend::parse_source;
use pl0_frontend::utils::errors::{Pl0Error, Pl0Result};
use pretty_assertions::assert_eq;
use rstest::rstest;

// Parses a source that must be free of syntax errors.
fn parse_clean(source: &str) -> Pl0Result<Program> {
    let (program, diagnostics) = parse_source(source);
    if diagnostics.is_empty() {
        Ok(program)
    } else {
        for diagnostic in &diagnostics {
            eprintln!("{}", diagnostic);
        }
        Err(Pl0Error::Syntax {
            count: diagnostics.len(),
        })
    }
}

// The right-hand side of `x := <expr>.`
fn parse_expression(expr: &str) -> Pl0Result<Expression> {
    let program = parse_clean(&format!("x := {}.", expr))?;
    match program.block.body {
        Statement::Assign { expr, .. } => Ok(expr),
        other => panic!("not an assignment: {:?}", other),
    }
}

// Integer evaluation of literal-only expressions, used to check operator grouping.
fn eval(expr: &Expression) -> i64 {
    match expr {
        Expression::Number(value) => *value,
        Expression::Unary { op, operand } => match op {
            UnaryOp::Plus => eval(operand),
            UnaryOp::Minus => -eval(operand),
        },
        Expression::Binary { left, op, right } => {
            let (l, r) = (eval(left), eval(right));
            match op {
                BinaryOp::Add => l + r,
                BinaryOp::Subtract => l - r,
                BinaryOp::Multiply => l * r,
                BinaryOp::Divide => l / r,
            }
        }
        Expression::Parenthesized(inner) => eval(inner),
        Expression::Identifier(name) => panic!("unbound identifier {}", name),
        Expression::Empty => panic!("placeholder in expression"),
    }
}

#[test]
fn test_minimal_program() -> Pl0Result<()> {
    let program = parse_clean("var x; begin x := 1 end.")?;
    let expected = Program::new(Block::new(
        vec![],
        vec![VarDeclaration::new("x")],
        vec![],
        Statement::Compound(vec![Statement::assign("x", Expression::number(1))]),
    ));
    assert_eq!(program, expected);
    assert_eq!(
        to_sexpr(&program),
        "(program (block (consts) (vars (var x)) (procedures) (begin (assign x 1))))"
    );
    Ok(())
}

#[test]
fn test_const_var_and_body() -> Pl0Result<()> {
    let program = parse_clean("const a = 1; var b; begin b := a + 1 end.")?;
    assert_eq!(program.block.consts, vec![ConstDeclaration::new("a", 1)]);
    assert_eq!(program.block.vars, vec![VarDeclaration::new("b")]);
    assert_eq!(
        program.block.body,
        Statement::Compound(vec![Statement::assign(
            "b",
            Expression::binary(Expression::ident("a"), BinaryOp::Add, Expression::number(1)),
        )])
    );
    assert_eq!(
        to_sexpr(&program),
        concat!(
            "(program (block (consts (const a 1)) (vars (var b)) (procedures) ",
            "(begin (assign b (+ a 1)))))"
        )
    );
    Ok(())
}

#[test]
fn test_only_a_dot() -> Pl0Result<()> {
    let program = parse_clean(".")?;
    assert_eq!(program, Program::new(Block::empty()));
    Ok(())
}

#[test]
fn test_declaration_lists() -> Pl0Result<()> {
    let program = parse_clean("const a = 1, b = 20; var x, y, z; x := a + b.")?;
    assert_eq!(
        program.block.consts,
        vec![ConstDeclaration::new("a", 1), ConstDeclaration::new("b", 20)]
    );
    assert_eq!(
        program.block.vars,
        vec![
            VarDeclaration::new("x"),
            VarDeclaration::new("y"),
            VarDeclaration::new("z"),
        ]
    );
    assert!(program.block.procedures.is_empty());
    Ok(())
}

#[test]
fn test_nested_procedures() -> Pl0Result<()> {
    let program = parse_clean(
        "procedure outer;
           procedure inner;
             call outer;
           call inner;
         .",
    )?;
    let inner = ProcedureDeclaration::new(
        "inner",
        Block::new(vec![], vec![], vec![], Statement::call("outer")),
    );
    let outer = ProcedureDeclaration::new(
        "outer",
        Block::new(vec![], vec![], vec![inner], Statement::call("inner")),
    );
    assert_eq!(program.block.procedures, vec![outer]);
    assert!(program.block.body.is_empty());
    Ok(())
}

#[test]
fn test_nested_blocks_keep_their_own_declarations() -> Pl0Result<()> {
    let program = parse_clean(
        "const a = 1; var x;
         procedure outer;
           const b = 2; var y;
           procedure inner;
             var z;
             z := b;
           y := a;
         x := 1.",
    )?;
    let top = &program.block;
    assert_eq!(top.consts, vec![ConstDeclaration::new("a", 1)]);
    assert_eq!(top.vars, vec![VarDeclaration::new("x")]);
    assert_eq!(top.procedures.len(), 1);

    let outer = &top.procedures[0];
    assert_eq!(outer.name, "outer");
    assert_eq!(outer.body.consts, vec![ConstDeclaration::new("b", 2)]);
    assert_eq!(outer.body.vars, vec![VarDeclaration::new("y")]);
    assert_eq!(outer.body.body, Statement::assign("y", Expression::ident("a")));
    assert_eq!(outer.body.procedures.len(), 1);

    let inner = &outer.body.procedures[0];
    assert_eq!(inner.name, "inner");
    assert!(inner.body.consts.is_empty());
    assert_eq!(inner.body.vars, vec![VarDeclaration::new("z")]);
    assert!(inner.body.procedures.is_empty());
    assert_eq!(inner.body.body, Statement::assign("z", Expression::ident("b")));
    Ok(())
}

#[test]
fn test_sibling_procedures_keep_source_order() -> Pl0Result<()> {
    let program = parse_clean("procedure p; ; procedure q; write q; call p.")?;
    let names: Vec<&str> = program
        .block
        .procedures
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["p", "q"]);
    assert_eq!(program.block.body, Statement::call("p"));
    Ok(())
}

#[test]
fn test_statement_forms() -> Pl0Result<()> {
    let program = parse_clean(
        "var n;
         begin
           read n;
           while n > 0 do n := n - 1;
           write n
         end.",
    )?;
    let expected = Statement::Compound(vec![
        Statement::read("n"),
        Statement::while_do(
            Condition::Binary {
                left: Expression::ident("n"),
                op: RelationalOp::GreaterThan,
                right: Expression::number(0),
            },
            Statement::assign(
                "n",
                Expression::binary(
                    Expression::ident("n"),
                    BinaryOp::Subtract,
                    Expression::number(1),
                ),
            ),
        ),
        Statement::write("n"),
    ]);
    assert_eq!(program.block.body, expected);
    Ok(())
}

#[test]
fn test_if_without_else() -> Pl0Result<()> {
    let program = parse_clean("if odd x then call p.")?;
    assert_eq!(
        program.block.body,
        Statement::if_then(Condition::Odd(Expression::ident("x")), Statement::call("p"), None)
    );
    Ok(())
}

#[test]
fn test_if_with_else() -> Pl0Result<()> {
    let program = parse_clean("if x <= 3 then call p else write x.")?;
    assert_eq!(
        to_sexpr(&program),
        "(program (block (consts) (vars) (procedures) (if (<= x 3) (call p) (write x))))"
    );
    Ok(())
}

#[test]
fn test_else_binds_to_the_nearest_if() -> Pl0Result<()> {
    let program = parse_clean("if a = 1 then if b = 2 then write a else write b.")?;
    match &program.block.body {
        Statement::If {
            then_branch,
            else_branch,
            ..
        } => {
            assert!(else_branch.is_none());
            assert!(matches!(
                then_branch.as_ref(),
                Statement::If {
                    else_branch: Some(_),
                    ..
                }
            ));
        }
        other => panic!("expected if statement, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_else_can_be_assigned() -> Pl0Result<()> {
    let program = parse_clean("var else; if odd x then else := 1.")?;
    assert_eq!(program.block.vars, vec![VarDeclaration::new("else")]);
    assert_eq!(
        program.block.body,
        Statement::if_then(
            Condition::Odd(Expression::ident("x")),
            Statement::assign("else", Expression::number(1)),
            None,
        )
    );
    Ok(())
}

#[test]
fn test_empty_statements_in_compound() -> Pl0Result<()> {
    let program = parse_clean("begin ; ; end.")?;
    assert_eq!(
        program.block.body,
        Statement::Compound(vec![Statement::Empty, Statement::Empty, Statement::Empty])
    );
    Ok(())
}

#[rstest]
#[case("=", RelationalOp::Equal)]
#[case("<>", RelationalOp::NotEqual)]
#[case("<", RelationalOp::LessThan)]
#[case("<=", RelationalOp::LessThanEqual)]
#[case(">", RelationalOp::GreaterThan)]
#[case(">=", RelationalOp::GreaterThanEqual)]
fn test_relational_conditions(#[case] op: &str, #[case] expected: RelationalOp) -> Pl0Result<()> {
    let program = parse_clean(&format!("while a {} b do write a.", op))?;
    match program.block.body {
        Statement::While { condition, .. } => {
            assert_eq!(
                condition,
                Condition::Binary {
                    left: Expression::ident("a"),
                    op: expected,
                    right: Expression::ident("b"),
                }
            );
        }
        other => panic!("expected while statement, got {:?}", other),
    }
    Ok(())
}

#[rstest]
#[case("1 - 2 - 3", -4)]
#[case("10 - 3 - 2", 5)]
#[case("100 / 10 / 2", 5)]
#[case("2 + 3 * 4", 14)]
#[case("(2 + 3) * 4", 20)]
#[case("-2 * 3 + 10", 4)]
#[case("+7 - 1", 6)]
#[case("8 / 2 * 2", 8)]
#[case("1 - (2 - 3)", 2)]
fn test_operator_grouping(#[case] source: &str, #[case] value: i64) -> Pl0Result<()> {
    assert_eq!(eval(&parse_expression(source)?), value);
    Ok(())
}

#[test]
fn test_subtraction_folds_left() -> Pl0Result<()> {
    let expr = parse_expression("a - b - c")?;
    let expected = Expression::binary(
        Expression::binary(Expression::ident("a"), BinaryOp::Subtract, Expression::ident("b")),
        BinaryOp::Subtract,
        Expression::ident("c"),
    );
    assert_eq!(expr, expected);
    Ok(())
}

#[test]
fn test_sign_applies_to_the_first_term() -> Pl0Result<()> {
    assert_eq!(parse_expression("-a * b")?.to_string(), "(- (* a b))");
    assert_eq!(parse_expression("-a + b")?.to_string(), "(+ (- a) b)");
    assert_eq!(parse_expression("+a")?.to_string(), "(+ a)");
    Ok(())
}

#[test]
fn test_parentheses_are_kept() -> Pl0Result<()> {
    let expr = parse_expression("(1 + 2) * 3")?;
    assert_eq!(expr.to_string(), "(* (paren (+ 1 2)) 3)");
    assert_eq!(parse_expression("((x))")?.to_string(), "(paren (paren x))");
    Ok(())
}

#[test]
fn test_node_count() -> Pl0Result<()> {
    // program, block, assign, number
    assert_eq!(NodeCounter::count_nodes(&parse_clean("x := 1.")?), 4);
    // + const, var, procedure, its block, its empty body, binary, two identifiers
    let program = parse_clean("const c = 1; var v; procedure p; ; v := v + c.")?;
    assert_eq!(NodeCounter::count_nodes(&program), 11);
    Ok(())
}

#[derive(Default)]
struct CallCollector {
    calls: Vec<String>,
}

impl Visitor for CallCollector {
    fn visit_statement(&mut self, stmt: &Statement) {
        if let Statement::Call { name } = stmt {
            self.calls.push(name.clone());
        }
        pl0_frontend::ast::visitor::walk_statement(self, stmt);
    }
}

#[test]
fn test_visitor_reaches_nested_statements() -> Pl0Result<()> {
    let program = parse_clean(
        "procedure a; call b;
         procedure b; begin if odd 1 then call a else call c end;
         while 1 < 2 do begin call d end.",
    )?;
    let mut collector = CallCollector::default();
    collector.visit_program(&program);
    assert_eq!(collector.calls, vec!["b", "a", "c", "d"]);
    Ok(())
}

#[test]
fn test_large_literal_within_range() -> Pl0Result<()> {
    let expr = parse_expression("9223372036854775807")?;
    assert_eq!(expr, Expression::number(i64::MAX));
    Ok(())
}
