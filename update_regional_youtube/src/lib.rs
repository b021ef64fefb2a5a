use std::ffi::OsString;

use clap::{
    arg,
    builder::{NonEmptyStringValueParser, PossibleValue, PossibleValuesParser, TypedValueParser},
    command,
    error::ErrorKind,
    Command,
};
use slug_updater::{Field, Language, UpdateRequest};

#[derive(Clone, Debug, PartialEq)]
pub struct Args {
    pub language: Language,
    pub slug: String,
    pub youtube_link: String,
    pub record_id: Option<String>,
}

impl Args {
    pub fn request(&self) -> UpdateRequest {
        UpdateRequest {
            slug: self.slug.clone(),
            value: self.youtube_link.clone(),
            field: Field::RegionalVideo(self.language),
            record_id: self.record_id.clone(),
        }
    }
}

fn language_parser() -> impl TypedValueParser<Value = Language> {
    let codes = Language::ALL.map(|language| PossibleValue::new(language.code()).help(language.name()));

    PossibleValuesParser::new(codes).try_map(|code| code.parse::<Language>())
}

pub fn command() -> Command {
    command!()
        .about("Sets data.<LANGUAGE>.media.video on the document with the given slug")
        .arg(arg!(<LANGUAGE> "The language code of the regional video").value_parser(language_parser()))
        .arg(
            arg!(<SLUG> "The unique identifier for the document (e.g., fpktnk.json)")
                .value_parser(NonEmptyStringValueParser::new()),
        )
        .arg(
            arg!(<YOUTUBE_LINK> "The new YouTube video link")
                .value_parser(NonEmptyStringValueParser::new()),
        )
        .arg(
            arg!(--id <RECORD_ID> "Update the matching document with this _id instead of picking one")
                .required(false)
                .value_parser(NonEmptyStringValueParser::new()),
        )
        .after_help(
            "Example:\n  update_regional_youtube ta fpktnk.json https://www.youtube.com/watch?v=example",
        )
}

/// What to print when parsing fails. Help and version output is passed
/// through, every other error is followed by the usage line.
pub fn usage_report(err: &clap::Error) -> String {
    let mut report = err.render().to_string();

    if !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        && !report.contains("Usage:")
    {
        report.push('\n');
        report.push_str(&command().render_usage().to_string());
        report.push('\n');
    }

    report
}

pub fn parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut matches = command().try_get_matches_from(args)?;

    let language = matches
        .remove_one::<Language>("LANGUAGE")
        .ok_or_else(|| clap::Error::new(ErrorKind::MissingRequiredArgument))?;

    Ok(Args {
        language,
        slug: matches.remove_one::<String>("SLUG").unwrap_or_default(),
        youtube_link: matches.remove_one::<String>("YOUTUBE_LINK").unwrap_or_default(),
        record_id: matches.remove_one::<String>("id"),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn parses_language_slug_and_link() {
        let args = parse_from([
            "update_regional_youtube",
            "ta",
            "fpktnk.json",
            "https://www.youtube.com/watch?v=example",
        ])
        .unwrap();

        assert_eq!(
            args,
            Args {
                language: Language::Tamil,
                slug: "fpktnk.json".to_string(),
                youtube_link: "https://www.youtube.com/watch?v=example".to_string(),
                record_id: None,
            }
        );
        assert_eq!(args.request().field.path().dotted(), "data.ta.media.video");
    }

    #[test]
    fn accepts_every_supported_language() {
        for language in Language::ALL {
            let args =
                parse_from(["update_regional_youtube", language.code(), "s", "https://y.tb/v"])
                    .unwrap();
            assert_eq!(args.language, language);
        }
    }

    #[test]
    fn rejects_unknown_language() {
        let err = parse_from([
            "update_regional_youtube",
            "xx",
            "fpktnk.json",
            "https://www.youtube.com/watch?v=example",
        ])
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn unknown_language_report_lists_codes_and_usage() {
        let err = parse_from(["update_regional_youtube", "xx", "fpktnk.json", "https://y"])
            .unwrap_err();

        let report = usage_report(&err);

        assert!(report.contains("'xx'"));
        assert!(report.contains("kok"));
        assert!(report.contains("Usage: update_regional_youtube"));
        assert_eq!(report.matches("Usage:").count(), 1);
    }

    #[test]
    fn empty_argument_report_includes_usage() {
        let err = parse_from(["update_regional_youtube", "ta", "", "https://y"]).unwrap_err();

        assert!(usage_report(&err).contains("Usage: update_regional_youtube"));
    }

    #[test]
    fn missing_argument_report_shows_usage_once() {
        let err = parse_from(["update_regional_youtube", "ta"]).unwrap_err();

        assert_eq!(usage_report(&err).matches("Usage:").count(), 1);
    }

    #[test]
    fn help_report_is_the_full_help() {
        let err = parse_from(["update_regional_youtube", "--help"]).unwrap_err();
        let report = usage_report(&err);

        assert!(report.contains("Example:"));
        assert!(report.contains("Tamil"));
    }

    #[test]
    fn help_flags_are_reported_as_errors() {
        for flag in ["-h", "--help"] {
            let err = parse_from(["update_regional_youtube", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn rejects_missing_and_empty_arguments() {
        let cases: [&[&str]; 3] = [
            &["update_regional_youtube", "ta"],
            &["update_regional_youtube", "ta", "fpktnk.json"],
            &["update_regional_youtube", "ta", "fpktnk.json", ""],
        ];

        for case in cases {
            assert!(parse_from(case.iter().copied()).is_err(), "{case:?} should be rejected");
        }
    }
}
