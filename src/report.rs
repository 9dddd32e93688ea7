//! Aggregated diagnostics report.
//!
//! Each subsystem renders its own JSON fragment independently (possibly on
//! another thread, with its own [`Encoder`](crate::Encoder)). A [`Report`]
//! only names the fragments and joins them:
//!
//! ```text
//! {"memory_stats":{"file_manager":<fragment>,"sticker_sets":<fragment>}}
//! ```
//!
//! Fragments are embedded verbatim; the report neither re-parses nor
//! validates them.
//!
//! ## Examples
//!
//! ```rust
//! use tl_inspect::{DynObject, EncoderOptions, Report};
//!
//! let mut report = Report::new();
//! report.add_section("callbacks", "{}");
//! report
//!     .add_object(
//!         "files",
//!         &DynObject::new("fileStats").with("count", 2),
//!         &EncoderOptions::compact(),
//!     )
//!     .unwrap();
//!
//! let stats = report.render();
//! assert!(stats.as_str().starts_with("{\"memory_stats\":{\"callbacks\":{},\"files\":{"));
//! ```

use crate::escape::write_quoted;
use crate::{
    to_string_with_options, Describe, Encoder, EncoderOptions, Field, FieldKind, Result,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the single top-level member holding all sections.
pub const REPORT_KEY: &str = "memory_stats";

/// A subsystem that can describe its own state for a report.
pub trait StatsSource {
    /// Key the subsystem's fragment is filed under.
    fn stats_key(&self) -> &str;

    /// Renders the subsystem's fragment. Must be a complete JSON value.
    fn memory_stats(&self) -> Result<String>;
}

/// The rendered report text.
///
/// Also a schema object in its own right: it renders as
/// `memoryStatistics { statistics }` with the report embedded as a string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStats {
    debug: String,
}

impl MemoryStats {
    pub fn new(debug: impl Into<String>) -> Self {
        MemoryStats {
            debug: debug.into(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.debug
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.debug
    }
}

impl Describe for MemoryStats {
    fn type_name(&self) -> &str {
        "memoryStatistics"
    }

    fn describe_fields(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.emit_field("statistics", &self.debug)
    }
}

impl Field for MemoryStats {
    const KIND: FieldKind = FieldKind::Compound;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        self.store(encoder, name)
    }
}

impl fmt::Display for MemoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug)
    }
}

/// Ordered collection of named subsystem fragments.
#[derive(Clone, Debug, Default)]
pub struct Report {
    sections: IndexMap<String, String>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `fragment` under `key`.
    ///
    /// Re-adding a key replaces the fragment but keeps the key's position.
    pub fn add_section(&mut self, key: impl Into<String>, fragment: impl Into<String>) {
        let key = key.into();
        if self.sections.insert(key.clone(), fragment.into()).is_some() {
            tracing::debug!(key = %key, "replaced report section");
        }
    }

    /// Renders a subsystem through its [`StatsSource`] impl.
    ///
    /// # Errors
    ///
    /// Returns the subsystem's error; the report is left unchanged.
    pub fn add_source<S: StatsSource + ?Sized>(&mut self, source: &S) -> Result<()> {
        let fragment = source.memory_stats()?;
        self.add_section(source.stats_key(), fragment);
        Ok(())
    }

    /// Renders a schema object with its own encoder and files it under `key`.
    ///
    /// # Errors
    ///
    /// Returns the encoder's error; the report is left unchanged.
    pub fn add_object<D: Describe + ?Sized>(
        &mut self,
        key: impl Into<String>,
        object: &D,
        options: &EncoderOptions,
    ) -> Result<()> {
        let fragment = to_string_with_options(object, options.clone())?;
        self.add_section(key, fragment);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Joins all sections into one document.
    #[must_use]
    pub fn render(&self) -> MemoryStats {
        let capacity = self
            .sections
            .iter()
            .map(|(k, v)| k.len() + v.len() + 4)
            .sum::<usize>()
            + REPORT_KEY.len()
            + 8;
        let mut out = String::with_capacity(capacity);
        out.push('{');
        write_quoted(&mut out, REPORT_KEY);
        out.push_str(":{");
        for (i, (key, fragment)) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_quoted(&mut out, key);
            out.push(':');
            out.push_str(fragment);
        }
        out.push_str("}}");
        tracing::debug!(sections = self.sections.len(), len = out.len(), "rendered report");
        MemoryStats::new(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{to_string, DynObject, Error};

    struct Counter {
        key: &'static str,
        count: u32,
    }

    impl StatsSource for Counter {
        fn stats_key(&self) -> &str {
            self.key
        }

        fn memory_stats(&self) -> Result<String> {
            Ok(format!("{{\"count\":{}}}", self.count))
        }
    }

    struct Broken;

    impl StatsSource for Broken {
        fn stats_key(&self) -> &str {
            "broken"
        }

        fn memory_stats(&self) -> Result<String> {
            Err(Error::custom("not started"))
        }
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(Report::new().render().as_str(), "{\"memory_stats\":{}}");
    }

    #[test]
    fn test_sections_joined_in_order() {
        let mut report = Report::new();
        report
            .add_source(&Counter {
                key: "stickers",
                count: 4,
            })
            .unwrap();
        report
            .add_source(&Counter {
                key: "animations",
                count: 1,
            })
            .unwrap();
        assert_eq!(
            report.render().as_str(),
            r#"{"memory_stats":{"stickers":{"count":4},"animations":{"count":1}}}"#
        );
    }

    #[test]
    fn test_replacement_keeps_position() {
        let mut report = Report::new();
        report.add_section("a", "1");
        report.add_section("b", "2");
        report.add_section("a", "3");
        assert_eq!(report.len(), 2);
        assert_eq!(report.render().as_str(), r#"{"memory_stats":{"a":3,"b":2}}"#);
    }

    #[test]
    fn test_keys_escaped() {
        let mut report = Report::new();
        report.add_section("we\"ird", "null");
        assert_eq!(
            report.render().as_str(),
            r#"{"memory_stats":{"we\"ird":null}}"#
        );
    }

    #[test]
    fn test_statistics_object_embeds_escaped_report() {
        let mut report = Report::new();
        report.add_section("files", r#"{"path":"C:\\tmp"}"#);
        let stats = report.render();

        let json = to_string(&stats).unwrap();
        assert!(json.starts_with("{\n  \"@type\": \"memoryStatistics\",\n  \"statistics\": \"{\\\"memory_stats"));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["@type"], "memoryStatistics");
        assert_eq!(parsed["statistics"], stats.as_str());

        let inner: serde_json::Value =
            serde_json::from_str(parsed["statistics"].as_str().unwrap()).unwrap();
        assert_eq!(inner["memory_stats"]["files"]["path"], "C:\\tmp");
    }

    #[test]
    fn test_failed_source_leaves_report_unchanged() {
        let mut report = Report::new();
        assert!(report.add_source(&Broken).is_err());
        assert!(report.is_empty());
    }

    #[test]
    fn test_embedded_objects_parse() {
        let mut report = Report::new();
        let options = EncoderOptions::default();
        report
            .add_object("files", &DynObject::new("fileStats").with("count", 2), &options)
            .unwrap();
        report
            .add_object("users", &DynObject::new("userStats").with("cached", 10), &options)
            .unwrap();
        let stats = report.render();
        let parsed: serde_json::Value = serde_json::from_str(stats.as_str()).unwrap();
        assert_eq!(parsed["memory_stats"]["files"]["count"], 2);
        assert_eq!(parsed["memory_stats"]["users"]["@type"], "userStats");
    }
}
