fn main() {
    let stamp = chrono::Local::now().format("%H:%M:%S on %b %e %Y");
    println!("cargo:rustc-env=TESTKIT_COMPILE_TIME={stamp}");
    println!("cargo:rerun-if-changed=src");
}
