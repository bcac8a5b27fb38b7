//! Approach configuration.
//!
//! An [`ApproachConfig`] names a cursor-maintenance approach and its
//! parameters. It deserializes from JSON and builds a boxed
//! [`CursorFormatter`](crate::maintain::CursorFormatter) for a named format.
//! Nothing here evaluates user-supplied code: formats come from a fixed
//! registry and testers from the tester spec language.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CursorError, CursorResult};
use crate::formats;
use crate::harness::ad_hoc;
use crate::maintain::{
    Augmented, BoxedFormatter, FrequencyRatio, LayerMaintainer, Maintained, RetrospectiveMaintainer,
    SplitEditDistance, Tester,
};

/// Built-in cost functions for the retrospective approach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CostKind {
    #[default]
    FrequencyRatios,
    SplitLevenshtein,
}

impl CostKind {
    pub fn parse(name: &str) -> CursorResult<Self> {
        match name {
            "frequencyRatios" => Ok(Self::FrequencyRatios),
            "splitLevenshtein" => Ok(Self::SplitLevenshtein),
            _ => Err(CursorError::UnknownCostFunction {
                name: name.to_owned(),
            }),
        }
    }
}

/// Which approach maintains the cursor, and how it is tuned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "approach", rename_all = "camelCase")]
pub enum ApproachConfig {
    /// Format only; the raw cursor passes through, clamped to the new length.
    Plain,
    /// Hand-tuned per-format arithmetic (comparison baseline).
    AdHoc,
    /// The format's [`TextWithCursor`](crate::maintain::TextWithCursor) reimplementation.
    Meta,
    /// Layer approach. Empty `testers` and a missing `preferRight` fall back
    /// to the format's defaults.
    #[serde(rename_all = "camelCase")]
    Layer {
        #[serde(default)]
        testers: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefer_right: Option<bool>,
    },
    /// Retrospective approach with a built-in cost function.
    #[serde(rename_all = "camelCase")]
    Retrospective {
        #[serde(default)]
        cost_function: CostKind,
    },
}

impl Default for ApproachConfig {
    fn default() -> Self {
        Self::Retrospective {
            cost_function: CostKind::default(),
        }
    }
}

/// Layer testers and tie-break direction that suit a plain format.
pub fn layer_defaults(format: &str) -> (&'static [&'static str], bool) {
    match format {
        "trimify" | "trim" => (&["nonSpace"][..], true),
        _ => (&["digit"][..], false),
    }
}

impl ApproachConfig {
    /// Parse a short approach name as used on the command line.
    ///
    /// `splitLevenshtein` and `frequencyRatios` select the retrospective
    /// approach with that cost function.
    pub fn from_name(name: &str) -> CursorResult<Self> {
        match name {
            "plain" => Ok(Self::Plain),
            "adHoc" => Ok(Self::AdHoc),
            "meta" => Ok(Self::Meta),
            "layer" => Ok(Self::Layer {
                testers: Vec::new(),
                prefer_right: None,
            }),
            "retrospective" => Ok(Self::default()),
            other => CostKind::parse(other)
                .map(|cost_function| Self::Retrospective { cost_function })
                .map_err(|_| CursorError::UnknownApproach {
                    name: other.to_owned(),
                }),
        }
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> CursorResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| CursorError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Build a cursor-maintaining formatter for the named plain format.
    pub fn build(&self, format: &str) -> CursorResult<BoxedFormatter> {
        debug!(approach = ?self, format, "building cursor formatter");
        match self {
            Self::Plain => {
                let plain = formats::lookup(format)?;
                Ok(Box::new(move |raw: &str, cursor: usize| {
                    let text = plain(raw);
                    let cursor = cursor.min(text.chars().count());
                    Maintained::new(text, cursor)
                }))
            }
            Self::AdHoc => Ok(Box::new(ad_hoc::lookup(format)?)),
            Self::Meta => Ok(Box::new(formats::meta::lookup(format)?)),
            Self::Layer {
                testers,
                prefer_right,
            } => {
                let plain = formats::lookup(format)?;
                let (default_testers, default_prefer_right) = layer_defaults(format);
                let specs: Vec<&str> = if testers.is_empty() {
                    default_testers.to_vec()
                } else {
                    testers.iter().map(String::as_str).collect()
                };
                let testers = specs
                    .into_iter()
                    .map(Tester::parse)
                    .collect::<CursorResult<Vec<_>>>()?;
                let maintainer =
                    LayerMaintainer::new(testers, prefer_right.unwrap_or(default_prefer_right));
                Ok(Box::new(Augmented::new(plain, maintainer)))
            }
            Self::Retrospective { cost_function } => {
                let plain = formats::lookup(format)?;
                let formatter: BoxedFormatter = match cost_function {
                    CostKind::FrequencyRatios => {
                        Box::new(Augmented::new(plain, RetrospectiveMaintainer::new(FrequencyRatio)))
                    }
                    CostKind::SplitLevenshtein => {
                        Box::new(Augmented::new(plain, RetrospectiveMaintainer::new(SplitEditDistance)))
                    }
                };
                Ok(formatter)
            }
        }
    }
}

/// Command-line options for the `cursor-maintainer` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Plain format name; required unless comparing.
    pub format: Option<String>,
    pub approach: ApproachConfig,
    /// Run the comparison harness instead of the session loop.
    pub compare: bool,
    /// Compare text only.
    pub ignore_cursor: bool,
}

impl CliOptions {
    /// Parse arguments (without the program name).
    ///
    /// `--config <file>` replaces the approach wholesale; `--approach`,
    /// `--testers`, `--prefer-right`, and `--cost` adjust it.
    pub fn parse(args: impl IntoIterator<Item = String>) -> CursorResult<Self> {
        let mut format = None;
        let mut approach_name = None;
        let mut config_path = None;
        let mut testers = None;
        let mut prefer_right = None;
        let mut cost = None;
        let mut compare = false;
        let mut ignore_cursor = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--format" => format = Some(flag_value(&mut args, &arg)?),
                "--approach" => approach_name = Some(flag_value(&mut args, &arg)?),
                "--config" => config_path = Some(flag_value(&mut args, &arg)?),
                "--testers" => testers = Some(flag_value(&mut args, &arg)?),
                "--cost" => cost = Some(flag_value(&mut args, &arg)?),
                "--prefer-right" => prefer_right = Some(true),
                "--prefer-left" => prefer_right = Some(false),
                "--compare" => compare = true,
                "--ignore-cursor" => ignore_cursor = true,
                other => {
                    return Err(CursorError::UnknownArgument {
                        arg: other.to_owned(),
                    });
                }
            }
        }

        let mut approach = match (config_path, approach_name) {
            (Some(path), _) => ApproachConfig::load(Path::new(&path))?,
            (None, Some(name)) => ApproachConfig::from_name(&name)?,
            (None, None) if testers.is_some() || prefer_right.is_some() => {
                ApproachConfig::from_name("layer")?
            }
            (None, None) => ApproachConfig::default(),
        };

        match &mut approach {
            ApproachConfig::Layer {
                testers: layer_testers,
                prefer_right: layer_prefer_right,
            } => {
                if let Some(list) = testers {
                    *layer_testers = list.split(',').map(str::to_owned).collect();
                }
                if prefer_right.is_some() {
                    *layer_prefer_right = prefer_right;
                }
            }
            ApproachConfig::Retrospective { cost_function } => {
                if let Some(name) = cost {
                    *cost_function = CostKind::parse(&name)?;
                }
            }
            _ => {}
        }

        Ok(Self {
            format,
            approach,
            compare,
            ignore_cursor,
        })
    }
}

/// The value following `flag`.
fn flag_value(args: &mut impl Iterator<Item = String>, flag: &str) -> CursorResult<String> {
    args.next().ok_or_else(|| CursorError::MissingValue {
        flag: flag.to_owned(),
    })
}
