fn main() {
    let feature = |name: &str| std::env::var_os(format!("CARGO_FEATURE_{name}")).is_some();

    match (feature("STD"), feature("LIBM")) {
        (true, false) | (false, true) => {}
        (true, true) => panic!(
            "euler-frames: the \"std\" and \"libm\" trigonometry backends cannot both be enabled. \
             To use libm, pass `--no-default-features --features libm`."
        ),
        (false, false) => panic!(
            "euler-frames: no trigonometry backend enabled. Enable the \"std\" (default) or the \
             \"libm\" feature."
        ),
    }
}
