/// Architecture of the running machine, in the catalog's naming.
pub fn host_arch() -> &'static str {
    catalog_arch(std::env::consts::ARCH)
}

fn catalog_arch(rust_arch: &'static str) -> &'static str {
    match rust_arch {
        "arm" => "armv7",
        "powerpc64" => "ppc64le",
        "loongarch64" => "loongarch64",
        // x86_64, x86, aarch64, s390x, riscv64 share names.
        other => other,
    }
}
