use std::io::{self, Write};

use crate::ast::ast::{BinaryExpr, Expr, NumberExpr, UnaryExpr, Visitor};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const EMPTY: &str = "    ";

/// Formats a number without a decimal point when it has no fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value == value.trunc() && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Renders trees as labelled, indented diagrams.
///
/// As a `Visitor` it yields the compact label of a single node.
pub struct TreePrinter;

impl Visitor for TreePrinter {
    type Output = String;

    fn visit_number(&mut self, expr: &NumberExpr) -> String {
        format!("NUMBER: {}", format_number(expr.value))
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        format!("UNARY_OP: {}", expr.operator)
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        format!("OP: {}", expr.operator)
    }
}

impl TreePrinter {
    pub fn label(expr: &Expr) -> String {
        expr.accept(&mut TreePrinter)
    }

    /// Renders the full diagram, one `\n`-terminated line per node, pre-order.
    pub fn render(root: &Expr) -> String {
        let mut out = String::new();
        TreePrinter.render_node(root, "", true, &mut out);
        out
    }

    fn render_node(&mut self, node: &Expr, indent: &str, is_last: bool, out: &mut String) {
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        out.push_str(indent);
        out.push_str(branch);
        out.push_str(&node.accept(self));
        out.push('\n');

        // Bars continue only beside siblings that are still to come.
        let child_indent = format!("{}{}", indent, if is_last { EMPTY } else { VERTICAL });

        let children = node.children();
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            self.render_node(child, &child_indent, i + 1 == count, out);
        }
    }
}

/// Writes the visualization header followed by the root's label.
pub fn write_tree<W: Write>(out: &mut W, root: &Expr) -> io::Result<()> {
    writeln!(out, "Parse Tree Visualization:")?;
    writeln!(out, "{}", TreePrinter::label(root))
}

/// Writes the structure header followed by the full diagram.
pub fn write_structure<W: Write>(out: &mut W, root: &Expr) -> io::Result<()> {
    writeln!(out, "Parse Tree Structure:")?;
    write!(out, "{}", TreePrinter::render(root))
}

pub fn print_tree(root: &Expr) -> io::Result<()> {
    write_tree(&mut io::stdout().lock(), root)
}

pub fn visualize_tree(root: &Expr) -> io::Result<()> {
    write_structure(&mut io::stdout().lock(), root)
}
