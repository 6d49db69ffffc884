use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(fast_arithmetic, values(\"32\", \"64\"))");

    // Decide ideal word width for the eight-digits-at-a-time scanner. Refer to
    // src/swar.rs for where this has an effect.
    let target_arch = env::var_os("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_pointer_width = env::var_os("CARGO_CFG_TARGET_POINTER_WIDTH").unwrap_or_default();
    if target_pointer_width == "64"
        || target_arch == "aarch64"
        || target_arch == "mips64"
        || target_arch == "powerpc64"
        || target_arch == "x86_64"
        || target_arch == "loongarch64"
    {
        println!("cargo:rustc-cfg=fast_arithmetic=\"64\"");
    } else {
        println!("cargo:rustc-cfg=fast_arithmetic=\"32\"");
    }
}
