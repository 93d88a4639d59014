//! Unit tests for the record loader

#[cfg(test)]
mod tests {
    use crate::catalog::{CatalogError, Tool, load, parse};
    use std::io::Write;
    use std::path::Path;

    #[test]
    fn test_parse_valid_line_trims_fields_and_tags() {
        let catalog = parse("  Pro-Q 3 , EQ ,FabFilter , 179 , mastering ; surgical;dynamic \n".as_bytes());

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.tools()[0],
            Tool::new(
                "Pro-Q 3",
                "EQ",
                "FabFilter",
                179,
                vec!["mastering".into(), "surgical".into(), "dynamic".into()],
            )
        );
    }

    #[test]
    fn test_parse_keeps_tag_case() {
        let catalog = parse("Vital,Synth,Matt Tytel,0,Wavetable;Free\n".as_bytes());
        assert_eq!(catalog.tools()[0].tags, vec!["Wavetable", "Free"]);
    }

    #[test]
    fn test_parse_drops_non_integer_price() {
        let content = "Vital,Synth,Matt Tytel,0,wavetable\nFoo,Synth,Dev,abc,tag1;tag2\n";
        let catalog = parse(content.as_bytes());

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tools()[0].name, "Vital");
    }

    #[test]
    fn test_parse_drops_wrong_field_count() {
        let content = "\
Too,Few,Fields\n\
Too,Many,Fields,10,tag,extra\n\
Ok,EQ,Dev,10,tag\n";
        let catalog = parse(content.as_bytes());

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tools()[0].name, "Ok");
    }

    #[test]
    fn test_parse_drops_negative_and_decimal_prices() {
        let content = "A,EQ,Dev,-5,tag\nB,EQ,Dev,9.99,tag\nC,EQ,Dev,$10,tag\n";
        assert!(parse(content.as_bytes()).is_empty());
    }

    #[test]
    fn test_parse_accepts_prices_beyond_u32() {
        let catalog = parse("A,EQ,Dev,1,t\nB,EQ,Dev,5000000000,t\n".as_bytes());

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tools()[1].price, 5_000_000_000);
    }

    #[test]
    fn test_parse_drops_empty_name() {
        let catalog = parse(" ,EQ,Dev,0,tag\n".as_bytes());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let content = "\nA,EQ,Dev,0,tag\n\n   \nB,Synth,Dev,5,tag\n\n";
        let catalog = parse(content.as_bytes());

        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_parse_empty_tags_field() {
        let catalog = parse("A,EQ,Dev,0,\nB,EQ,Dev,0, ; ;\n".as_bytes());

        assert_eq!(catalog.len(), 2);
        assert!(catalog.tools()[0].tags.is_empty());
        assert!(catalog.tools()[1].tags.is_empty());
    }

    #[test]
    fn test_parse_quotes_are_literal() {
        let catalog = parse("\"Quoted\",EQ,Dev,0,tag\n\"A,B\",EQ,Dev,0,tag\n".as_bytes());

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tools()[0].name, "\"Quoted\"");
    }

    #[test]
    fn test_parse_handles_crlf() {
        let catalog = parse("A,EQ,Dev,0,warm;tape\r\nB,EQ,Dev,1,clean\r\n".as_bytes());

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tools()[0].tags, vec!["warm", "tape"]);
        assert_eq!(catalog.tools()[1].tags, vec!["clean"]);
    }

    #[test]
    fn test_parse_skips_invalid_utf8_line() {
        let mut content = b"A,EQ,Dev,0,tag\n".to_vec();
        content.extend_from_slice(b"B\xff,EQ,Dev,0,tag\n");
        content.extend_from_slice(b"C,EQ,Dev,0,tag\n");

        let catalog = parse(content.as_slice());
        let names: Vec<&str> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load(Path::new("definitely_missing_tools_database.txt"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Valhalla Supermassive,Reverb,Valhalla DSP,0,ambient;space").unwrap();
        writeln!(file, "broken line").unwrap();
        writeln!(file, "Serum,Synth,Xfer Records,189,wavetable").unwrap();

        let catalog = load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tools()[1].price, 189);
    }
}
