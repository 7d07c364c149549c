use mdsplice_core::metadata::slugify;

use crate::SlugArgs;

pub fn run(args: &SlugArgs) {
    println!("{}", slugify(&args.text.join(" ")));
}
