use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-special" => flags.no_special = true,
            "-c" | "--check" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue(args[i - 1].clone()));
                }
                flags.check = Some(args[i].clone());
            }
            "-l" | "--length" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue(args[i - 1].clone()));
                }
                flags.length = Some(
                    args[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                );
            }
            "-n" | "--number" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue(args[i - 1].clone()));
                }
                flags.number = Some(
                    args[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                );
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passmeter")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_generation_flags() {
        let flags = parse(&args(&["-l", "20", "-n", "3", "--no-special", "-b"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_special);
        assert!(flags.clipboard);
        assert!(!flags.no_lower);
    }

    #[test]
    fn parses_check_with_value() {
        let flags = parse(&args(&["--check", "hunter2"])).unwrap();
        assert_eq!(flags.check.as_deref(), Some("hunter2"));
    }

    #[test]
    fn rejects_unknown_argument() {
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".to_string()))
        );
    }

    #[test]
    fn rejects_bad_number_and_missing_value() {
        assert_eq!(
            parse(&args(&["-l", "abc"])),
            Err(ParseError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(
            parse(&args(&["-c"])),
            Err(ParseError::MissingValue("-c".to_string()))
        );
    }
}
