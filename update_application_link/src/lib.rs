use std::ffi::OsString;

use clap::{arg, builder::NonEmptyStringValueParser, command, error::ErrorKind, Command};
use slug_updater::{Field, UpdateRequest};

#[derive(Clone, Debug, PartialEq)]
pub struct Args {
    pub slug: String,
    pub application_link: String,
    pub record_id: Option<String>,
}

impl Args {
    pub fn request(&self) -> UpdateRequest {
        UpdateRequest {
            slug: self.slug.clone(),
            value: self.application_link.clone(),
            field: Field::ApplicationLink,
            record_id: self.record_id.clone(),
        }
    }
}

pub fn command() -> Command {
    command!()
        .about("Sets data.en.application_link.value on the document with the given slug")
        .arg(
            arg!(<SLUG> "The unique identifier for the document (e.g., fpktnk.json)")
                .value_parser(NonEmptyStringValueParser::new()),
        )
        .arg(
            arg!(<APPLICATION_LINK> "The new URL for the application link")
                .value_parser(NonEmptyStringValueParser::new()),
        )
        .arg(
            arg!(--id <RECORD_ID> "Update the matching document with this _id instead of picking one")
                .required(false)
                .value_parser(NonEmptyStringValueParser::new()),
        )
        .after_help("Example:\n  update_application_link fpktnk.json https://new-link.com")
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

    let mut take = |id: &str| matches.remove_one::<String>(id);

    Ok(Args {
        slug: take("SLUG").unwrap_or_default(),
        application_link: take("APPLICATION_LINK").unwrap_or_default(),
        record_id: take("id"),
    })
}
