/// The marker strings delimiting one input dialect.
///
/// Markers are matched as exact, case-sensitive substrings of the raw byte
/// stream. The format contract is deliberately loose:
///
/// - no escaping: a marker occurring inside field content is indistinguishable
///   from a real delimiter;
/// - no nesting of same-named tags: the first end marker after a start marker
///   always closes it;
/// - bytes outside markers are ignored entirely.
///
/// Inputs violating this contract produce silently wrong (not undefined)
/// results: empty fields, skipped records, or an early stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    /// Opens the outer list container.
    pub list_start: String,
    /// Closes the outer list container.
    pub list_end: String,
    /// Opens one record container.
    pub record_start: String,
    /// Closes one record container.
    pub record_end: String,
    /// Opens the identifier field inside a record.
    pub id_start: String,
    /// Closes the identifier field.
    pub id_end: String,
    /// Opens the display-name field inside a record.
    pub name_start: String,
    /// Closes the display-name field.
    pub name_end: String,
}

impl TagSet {
    /// The widget-list dialect: `<widgetList>` containers of `<widget>`
    /// records with `<widgetID>` and `<widgetName>` fields.
    #[must_use]
    pub fn widget() -> Self {
        Self {
            list_start: "<widgetList>".into(),
            list_end: "</widgetList>".into(),
            record_start: "<widget>".into(),
            record_end: "</widget>".into(),
            id_start: "<widgetID>".into(),
            id_end: "</widgetID>".into(),
            name_start: "<widgetName>".into(),
            name_end: "</widgetName>".into(),
        }
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self::widget()
    }
}
