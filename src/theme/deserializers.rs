use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use super::ThemeVariant;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

/// A length written in a theme file: a bare number (pixels) or a string
/// with a `px`, `rem` or `%` unit.
enum Length {
    Pixels(f32),
    Rems(f32),
    Percent(f32),
}

fn parse_length(value: StringOrFloat) -> Option<Length> {
    let string = match value {
        StringOrFloat::Float(num) => return Some(Length::Pixels(num)),
        StringOrFloat::String(string) => string,
    };

    let string = string.trim();

    if let Some(num) = string.strip_suffix("px") {
        num.trim().parse().ok().map(Length::Pixels)
    } else if let Some(num) = string.strip_suffix("rem") {
        num.trim().parse().ok().map(Length::Rems)
    } else if let Some(num) = string.strip_suffix('%') {
        num.trim().parse().ok().map(Length::Percent)
    } else {
        None
    }
}

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(SharedString),
        Many(SmallVec<[SharedString; 1]>),
    }

    match StringOrVec::deserialize(deserializer)? {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(list) if list.is_empty() => {
            Err(D::Error::custom("font family list can't be empty"))
        }
        StringOrVec::Many(list) => Ok(list),
    }
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let variants = SmallVec::<[ThemeVariant; 2]>::deserialize(deserializer)?;

    if variants.is_empty() {
        return Err(D::Error::custom(
            "at least one theme variant needs to be provided",
        ));
    }

    Ok(variants)
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    match parse_length(StringOrFloat::deserialize(deserializer)?) {
        Some(Length::Pixels(num)) => Ok(px(num)),
        _ => Err(D::Error::custom("expected f32 or a string ending with 'px'")),
    }
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match parse_length(StringOrFloat::deserialize(deserializer)?) {
        Some(Length::Pixels(num)) => Ok(AbsoluteLength::Pixels(px(num))),
        Some(Length::Rems(num)) => Ok(AbsoluteLength::Rems(rems(num))),
        _ => Err(D::Error::custom(
            "expected f32 or a string ending with 'rem' or 'px'",
        )),
    }
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    match parse_length(StringOrFloat::deserialize(deserializer)?) {
        Some(Length::Pixels(num)) => Ok(DefiniteLength::Absolute(AbsoluteLength::Pixels(px(
            num,
        )))),
        Some(Length::Rems(num)) => Ok(DefiniteLength::Absolute(AbsoluteLength::Rems(rems(num)))),
        Some(Length::Percent(num)) => Ok(DefiniteLength::Fraction(num / 100.)),
        None => Err(D::Error::custom(
            "expected f32 or a string ending with '%', 'rem' or 'px'",
        )),
    }
}
