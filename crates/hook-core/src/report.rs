//! Banner para el operador: línea de guiones del ancho de la línea más larga
//! del mensaje, saludo opcional, mensaje y línea de cierre.

use std::error::Error;
use std::fmt::Write;

/// Mensaje genérico para errores de sistema.
pub const SYS_ERROR_MESSAGE: &str = "Sorry, it's not your fault, it's ours, please contact CM for assistance";

const RULE_SYMBOL: char = '-';

pub fn banner(author: Option<&str>, message: &str) -> String {
    let width = message.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let rule: String = std::iter::repeat(RULE_SYMBOL).take(width).collect();

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    if let Some(author) = author {
        out.push_str("Dear ");
        out.push_str(author);
        out.push_str("\n\n");
    }
    out.push_str(message);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Banner de disculpa seguido del detalle del error y su cadena de causas.
pub fn failure_report(author: Option<&str>, error: &(dyn Error + 'static)) -> String {
    let mut out = banner(author, SYS_ERROR_MESSAGE);
    out.push('\n');
    let _ = writeln!(out, "Error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        let _ = writeln!(out, "Caused by: {cause}");
        source = cause.source();
    }
    out
}
