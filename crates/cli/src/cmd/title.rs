use mdsplice_core::metadata::{extract_title_from_file, slugify};

use crate::TitleArgs;

pub fn run(args: &TitleArgs) {
    let Some(title) = extract_title_from_file(&args.file) else {
        super::fail("title", format!("no title found in {}", args.file.display()));
    };

    println!("{title}");
    if args.slug {
        println!("{}", slugify(&title));
    }
}
