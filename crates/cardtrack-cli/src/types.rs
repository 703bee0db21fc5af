use cardtrack_core::{BadgeKind, Frame};
use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum FrameArg {
    Content,
    CardBack,
}

impl From<FrameArg> for Frame {
    fn from(frame: FrameArg) -> Self {
        match frame {
            FrameArg::Content => Frame::Content,
            FrameArg::CardBack => Frame::CardBack,
        }
    }
}

impl fmt::Display for FrameArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameArg::Content => write!(f, "content"),
            FrameArg::CardBack => write!(f, "card-back"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum BadgeArg {
    CurrentList,
    TotalTime,
    SpecificLists,
    PersonalTime,
}

impl From<BadgeArg> for BadgeKind {
    fn from(badge: BadgeArg) -> Self {
        match badge {
            BadgeArg::CurrentList => BadgeKind::CurrentList,
            BadgeArg::TotalTime => BadgeKind::TotalTime,
            BadgeArg::SpecificLists => BadgeKind::SpecificLists,
            BadgeArg::PersonalTime => BadgeKind::PersonalTime,
        }
    }
}

/// `KIND=COLOR`, e.g. `total-time=#61bd4f`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeColorArg {
    pub badge: BadgeArg,
    pub color: String,
}

pub fn parse_badge_color(raw: &str) -> Result<BadgeColorArg, String> {
    let (badge, color) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=COLOR, got '{}'", raw))?;
    let badge = BadgeArg::from_str(badge.trim(), true)?;
    let color = color.trim();
    if color.is_empty() {
        return Err(format!("missing color for '{}'", raw));
    }
    Ok(BadgeColorArg {
        badge,
        color: color.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_badge_color() {
        assert_eq!(
            parse_badge_color("total-time=#123456"),
            Ok(BadgeColorArg {
                badge: BadgeArg::TotalTime,
                color: "#123456".to_string(),
            })
        );
        assert!(parse_badge_color("total-time").is_err());
        assert!(parse_badge_color("total-time=").is_err());
        assert!(parse_badge_color("sparkles=#fff").is_err());
    }
}
