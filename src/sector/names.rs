//! System name lists

use std::path::Path;

use crate::core::Result;

/// Names used when no name file is given
const BUILTIN_NAMES: &[&str] = &[
    "Aramis", "Bellerophon", "Cassiopeia", "Dorannia", "Efate", "Feri", "Galla", "Harlequin",
    "Inthe", "Jewell", "Kinorb", "Lunion", "Mora", "Natoko", "Ochre", "Pannet", "Quiru",
    "Regina", "Saurus", "Tarsus", "Uakye", "Vilis", "Wypoc", "Xerxes", "Yori", "Zila",
    "Algine", "Boughene", "Celepina", "Dinom", "Emape", "Fulacin", "Garda", "Heya",
    "Iderati", "Junidy", "Kegplo", "Lysake", "Mertactor", "Nakege", "Ombur", "Pixie",
    "Quar", "Roup", "Shirene", "Tremous", "Ucella", "Vreibefger", "Wochiers", "Yebab",
    "Zeycude", "Andor", "Bevey", "Candory", "Ditron", "Enope", "Forine", "Glisten",
    "Hefry", "Ianic", "Jae Tellona", "Keanou", "Lanth", "Macene", "Nirton", "Olympia",
];

/// Built-in name list
pub fn builtin_names() -> Vec<String> {
    BUILTIN_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Parse a name list: one name per line, blank lines and lines starting
/// with `#` or `-` are skipped
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .map(String::from)
        .collect()
}

pub fn load_names(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_names(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_rules() {
        let names = parse_names("# Frontier names\nRegina\n\n  Efate  \n----\nJewell\n");
        assert_eq!(names, vec!["Regina", "Efate", "Jewell"]);
    }

    #[test]
    fn test_builtin_names_are_clean() {
        let names = builtin_names();
        assert!(!names.is_empty());
        assert_eq!(parse_names(&names.join("\n")), names);
    }
}
