#[derive(Debug, PartialEq)]
pub struct Config {
    pub image_paths: Vec<String>,
}

impl Config {
    /// Builds a `Config` from already-collected positional arguments (the program name is not
    /// included). Returns an error with a one-line usage message if no image was given.
    pub fn with(args: &[String]) -> Result<Self, &'static str> {
        if args.is_empty() {
            return Err("Usage: lc3 <image-file> [<image-file>...]");
        }

        Ok(Config {
            image_paths: args.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_with_single_image() {
        let args = [String::from("program.obj")];

        assert_eq!(
            Config::with(&args).unwrap().image_paths,
            vec![String::from("program.obj")]
        );
    }

    #[test]
    fn config_with_multiple_images() {
        let args = [String::from("a.obj"), String::from("b.obj")];

        assert_eq!(
            Config::with(&args).unwrap().image_paths,
            vec![String::from("a.obj"), String::from("b.obj")]
        );
    }

    #[test]
    fn config_with_no_images_is_a_usage_error() {
        let args: [String; 0] = [];

        assert!(Config::with(&args).is_err());
    }
}
