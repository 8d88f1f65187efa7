use crate::config::Config;
use crate::error::Result;
use crate::model::ContributorStats;
use std::borrow::Cow;
use std::io::Write;

pub fn write_csv(
    contributors: &[&ContributorStats],
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let aliases = config.aliases_visible();

    let mut header = vec!["Name", "Commits", "Lines Added", "Lines Deleted", "Total Lines"];
    if aliases {
        header.push("Aliases");
    }
    writeln!(out, "{}", header.join(","))?;

    for c in contributors {
        let mut record = vec![
            escape(&c.name).into_owned(),
            c.commit_count.to_string(),
            c.lines_added.to_string(),
            c.lines_deleted.to_string(),
            c.lines_changed.to_string(),
        ];
        if aliases {
            record.push(escape(&c.aliases.join("; ")).into_owned());
        }
        writeln!(out, "{}", record.join(","))?;
    }

    Ok(())
}

/// Quote a field when it holds a delimiter, quote or line break.
pub fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
