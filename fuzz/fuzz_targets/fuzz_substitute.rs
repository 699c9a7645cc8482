#![no_main]

use arbor::{substitute, FieldMap};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // First line is the template, the rest are `name=value` fields
        let mut lines = content.lines();
        let template = lines.next().unwrap_or_default();

        let mut fields = FieldMap::new("@");
        for line in lines {
            if let Some((name, value)) = line.split_once('=') {
                fields.set(name, value);
            }
        }

        // Substitution should never panic
        let _ = substitute(template, &fields);
    }
});
