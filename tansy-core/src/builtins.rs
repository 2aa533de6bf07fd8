//! Registration of the reserved words.

use crate::dictionary::{BuiltinKind, Dictionary, Form};
use crate::primitives;

pub fn register_builtins(dict: &mut Dictionary) {
    let p = BuiltinKind::Primitive;

    // Arithmetic and comparison; all of these iterate element-wise over
    // vector operands (see primitives/broadcast.rs).
    dict.install_builtin("+", p(primitives::plus::add));
    dict.install_builtin("-", p(primitives::minus::sub));
    dict.install_builtin("*", p(primitives::multiply::mul));
    dict.install_builtin("/", p(primitives::divide::div));
    dict.install_builtin("<", p(primitives::less_than::less_than));
    dict.install_builtin("<=", p(primitives::less_equal::less_equal));
    dict.install_builtin(">", p(primitives::greater_than::greater_than));
    dict.install_builtin(">=", p(primitives::greater_equal::greater_equal));
    dict.install_builtin("=", p(primitives::equals::equal));
    dict.install_builtin("NOT", p(primitives::not::not));

    // Stack shuffling
    dict.install_builtin("DUP", p(primitives::stack::dup));
    dict.install_builtin("DROP", p(primitives::stack::drop_top));
    dict.install_builtin("SWAP", p(primitives::stack::swap));
    dict.install_builtin("OVER", p(primitives::stack::over));
    dict.install_builtin("ROT", p(primitives::stack::rot));
    dict.install_builtin("NIP", p(primitives::stack::nip));

    // The register
    dict.install_builtin(">R", p(primitives::register::to_register));
    dict.install_builtin("R>", p(primitives::register::from_register));
    dict.install_builtin("R@", p(primitives::register::fetch_register));

    // Vectors
    dict.install_builtin("LENGTH", p(primitives::length::length));
    dict.install_builtin("HEAD", p(primitives::head::head));
    dict.install_builtin("TAIL", p(primitives::tail::tail));
    dict.install_builtin("CONS", p(primitives::cons::cons));
    dict.install_builtin("APPEND", p(primitives::append::append));
    dict.install_builtin("REVERSE", p(primitives::reverse::reverse));
    dict.install_builtin("NTH", p(primitives::nth::nth));
    dict.install_builtin("UNCONS", p(primitives::uncons::uncons));
    dict.install_builtin("EMPTY?", p(primitives::empty::is_empty));
    dict.install_builtin("EACH", p(primitives::each::each));

    // Output
    dict.install_builtin(".", p(primitives::print::dot));
    dict.install_builtin("PRINT", p(primitives::print::print));
    dict.install_builtin("CR", p(primitives::cr::cr));
    dict.install_builtin("SPACE", p(primitives::space::space));
    dict.install_builtin("SPACES", p(primitives::spaces::spaces));
    dict.install_builtin("EMIT", p(primitives::emit::emit));
    dict.install_builtin("WORDS", p(primitives::words::words));

    // Forms resolved inside the evaluator loop (they consume tokens or
    // splice into the execution queue).
    dict.install_builtin("DEF", BuiltinKind::Form(Form::Def));
    dict.install_builtin("DEL", BuiltinKind::Form(Form::Del));
    dict.install_builtin("IF", BuiltinKind::Form(Form::If));
}
