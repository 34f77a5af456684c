//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the limits of the upstream image API (query length,
//! page bounds, page size range) and basic URL sanity so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Longest search term accepted by the image API.
pub const MAX_SEARCH_TERM_CHARS: usize = 100;
/// Smallest page size accepted by the image API.
pub const MIN_PAGE_SIZE: u32 = 3;
/// Largest page size accepted by the image API.
pub const MAX_PAGE_SIZE: u32 = 200;
/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 40;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeded the allowed number of characters.
    #[error("value cannot be longer than {0} characters")]
    TooLong(usize),
    /// Page numbers start at one.
    #[error("page must be greater than zero")]
    NonPositivePage,
    /// Page size outside of the range accepted upstream.
    #[error("page size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}")]
    PageSizeOutOfRange,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
}

/// Trimmed, non-empty search term no longer than [`MAX_SEARCH_TERM_CHARS`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trims whitespace and rejects empty or oversized inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if trimmed.chars().count() > MAX_SEARCH_TERM_CHARS {
            return Err(TypeConstraintError::TooLong(MAX_SEARCH_TERM_CHARS));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the term as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for SearchTerm {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for SearchTerm {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SearchTerm> for String {
    fn from(value: SearchTerm) -> Self {
        value.0
    }
}

/// One-based page number.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u32")]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page of every search.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a page number ensuring it is greater than zero.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePage)
        }
    }

    /// Returns the raw `u32` backing this page number.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the page after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

/// Number of hits requested per page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a page size within the range accepted upstream.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if (MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::PageSizeOutOfRange)
        }
    }

    /// Returns the raw `u32` backing this page size.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Absolute `http`/`https` URL pointing at an image.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Parses the input and rejects relative URLs and non-web schemes.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let raw = value.into();
        let parsed = Url::parse(raw.trim()).map_err(|_| TypeConstraintError::InvalidUrl)?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self(parsed.into())),
            _ => Err(TypeConstraintError::InvalidUrl),
        }
    }

    /// Borrow the url as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ImageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ImageUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageUrl> for String {
    fn from(value: ImageUrl) -> Self {
        value.0
    }
}
