use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Sort order accepted by the discover endpoint.
/// The search endpoint ignores sorting upstream, so the TUI keeps the
/// selection but it only affects discover listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Upstream default ordering.
    #[default]
    Unsorted,
    PopularityDesc,
    ReleaseDateDesc,
    ReleaseDateAsc,
}

impl SortKey {
    /// The `sort_by` query parameter value, or None for the upstream default.
    pub fn api_param(self) -> Option<&'static str> {
        match self {
            SortKey::Unsorted => None,
            SortKey::PopularityDesc => Some("popularity.desc"),
            SortKey::ReleaseDateDesc => Some("primary_release_date.desc"),
            SortKey::ReleaseDateAsc => Some("primary_release_date.asc"),
        }
    }

    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Unsorted => "-",
            SortKey::PopularityDesc => "Popularity Desc",
            SortKey::ReleaseDateDesc => "Release Date Desc",
            SortKey::ReleaseDateAsc => "Release Date Asc",
        }
    }

    /// Cycles to the next sort option (wraps around)
    pub fn next(self) -> SortKey {
        match self {
            SortKey::Unsorted => SortKey::PopularityDesc,
            SortKey::PopularityDesc => SortKey::ReleaseDateDesc,
            SortKey::ReleaseDateDesc => SortKey::ReleaseDateAsc,
            SortKey::ReleaseDateAsc => SortKey::Unsorted,
        }
    }

    /// Cycles to the previous sort option (wraps around)
    pub fn prev(self) -> SortKey {
        match self {
            SortKey::Unsorted => SortKey::ReleaseDateAsc,
            SortKey::PopularityDesc => SortKey::Unsorted,
            SortKey::ReleaseDateDesc => SortKey::PopularityDesc,
            SortKey::ReleaseDateAsc => SortKey::ReleaseDateDesc,
        }
    }
}

/// One movie record as returned by the remote catalog.
/// Identified by `id`; immutable once received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    #[serde(rename = "original_title")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "deserialize_release_date")]
    pub release_date: Option<NaiveDate>,
}

impl MovieSummary {
    /// Four-digit release year, when the upstream provided a parseable date.
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year())
    }
}

/// The upstream sends `release_date` as `"YYYY-MM-DD"`, but also as `""` or
/// missing entirely for unreleased titles. All three collapse to None.
fn deserialize_release_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}

/// One validated page of catalog results.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingPage {
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// The raw response body for both listing endpoints.
///
/// The upstream reuses one shape for success and failure: a success carries
/// `results` plus pagination counters, a failure carries `status_message`.
/// [`RawListing::into_listing`] separates the two.
#[derive(Debug, Deserialize)]
pub struct RawListing {
    pub results: Option<Vec<MovieSummary>>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
    pub status_message: Option<String>,
}

impl RawListing {
    /// Validates the raw body: a response without a `results` collection is a
    /// failure whose message is the body's `status_message`, or "Error" when
    /// that is also absent.
    pub fn into_listing(self) -> Result<ListingPage, String> {
        match self.results {
            Some(results) => Ok(ListingPage {
                results,
                total_pages: self.total_pages,
                total_results: self.total_results,
            }),
            None => Err(self.status_message.unwrap_or_else(|| String::from("Error"))),
        }
    }
}
