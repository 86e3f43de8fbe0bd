/// Suffix appended to every exported document name.
const SUFFIX: &str = "profile.pdf";

/// File name for a profile's document: the slugified name followed by
/// `-profile.pdf`, or just `profile.pdf` when nothing of the name survives
/// slugification.
///
/// Slugification collapses each run of non-alphanumeric characters into a
/// single `-` and trims it from the ends. It also lowercases and
/// transliterates to ASCII, so `Émilie` becomes `emilie`.
pub fn artifact_file_name(name: &str) -> String {
    let slug = slug::slugify(name);
    if slug.is_empty() {
        SUFFIX.to_string()
    } else {
        format!("{}-{}", slug, SUFFIX)
    }
}
