use std::env;
use std::fs::File;
use std::path::Path;

use gl_generator::{Api, Fallbacks, GlobalGenerator, Profile, Registry};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let mut file = File::create(Path::new(&out_dir).join("gl_bindings.rs")).unwrap();

    // Immediate-mode calls (glBegin, glOrtho, ...) only exist in the
    // compatibility profile.
    Registry::new(Api::Gl, (2, 1), Profile::Compatibility, Fallbacks::All, [])
        .write_bindings(GlobalGenerator, &mut file)
        .unwrap();
}
