//! JSON decoding for animation documents.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::{Animation, Pixel};

/// Error returned when a document does not have the `[frame][row][pixel]` shape.
pub type ParseError = serde_json::Error;

/// Parse an animation document into an [`Animation`].
///
/// ## Format
///
/// The document is exactly one JSON value:
/// - level 1: array of frames
/// - level 2: each frame is an array of rows
/// - level 3: each row is an array of pixels
///
/// The three array levels are strict: an object, `null` or scalar where an
/// array belongs is a decode error, and so is trailing data after the
/// document. Pixel leaves are lenient: numbers become [`Pixel::Number`],
/// every other JSON value becomes [`Pixel::Invalid`] and is later drawn in
/// the default background color.
///
/// ## Example
///
/// ```rust
/// use halfblock_anim::{parse_animation, Pixel};
///
/// let animation = parse_animation(br#"[[[0, 255, "x"]]]"#).unwrap();
/// let row = &animation.frames()[0].rows()[0];
/// assert_eq!(row.pixels(), &[Pixel::Number(0.0), Pixel::Number(255.0), Pixel::Invalid]);
///
/// assert!(parse_animation(br#"{"not": "an array"}"#).is_err());
/// ```
pub fn parse_animation(data: &[u8]) -> Result<Animation, ParseError> {
    serde_json::from_slice(data)
}

impl<'de> Deserialize<'de> for Pixel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PixelVisitor)
    }
}

struct PixelVisitor;

impl<'de> Visitor<'de> for PixelVisitor {
    type Value = Pixel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a pixel value")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Pixel, E> {
        Ok(Pixel::Number(v as f64))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Pixel, E> {
        Ok(Pixel::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Pixel, E> {
        Ok(Pixel::Number(v))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Pixel, E> {
        Ok(Pixel::Invalid)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Pixel, E> {
        Ok(Pixel::Invalid)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Pixel, E> {
        Ok(Pixel::Invalid)
    }

    fn visit_none<E: de::Error>(self) -> Result<Pixel, E> {
        Ok(Pixel::Invalid)
    }

    // Nested containers still have to be consumed to keep the stream aligned.
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Pixel, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Pixel::Invalid)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Pixel, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Pixel::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Frame, Row};

    #[test]
    fn test_parse_shape_preserved() {
        let animation = parse_animation(b"[[[1,2,3],[4]],[],[[],[5,6],[7]]]").unwrap();

        assert_eq!(animation.frame_count(), 3);
        let rows: Vec<usize> = animation.frames().iter().map(Frame::row_count).collect();
        assert_eq!(rows, vec![2, 0, 3]);

        let lens: Vec<usize> = animation.frames()[2].rows().iter().map(Row::len).collect();
        assert_eq!(lens, vec![0, 2, 1]);
        assert_eq!(animation.frames()[0].rows()[1].get(0), Some(Pixel::Number(4.0)));
    }

    #[test]
    fn test_parse_empty_animation() {
        let animation = parse_animation(b" [ ]\n").unwrap();
        assert!(animation.is_empty());
    }

    #[test]
    fn test_parse_number_forms() {
        let animation = parse_animation(b"[[[-1, 2.75, 1e2, 300]]]").unwrap();
        assert_eq!(
            animation.frames()[0].rows()[0].pixels(),
            &[
                Pixel::Number(-1.0),
                Pixel::Number(2.75),
                Pixel::Number(100.0),
                Pixel::Number(300.0),
            ]
        );
    }

    #[test]
    fn test_parse_non_numeric_leaves_are_invalid() {
        let animation = parse_animation(br#"[[["red", true, null, [1, [2]], {"a": [3]}, 9]]]"#).unwrap();
        let row = &animation.frames()[0].rows()[0];

        assert_eq!(row.len(), 6);
        assert!(row.pixels()[..5].iter().all(|p| *p == Pixel::Invalid));
        assert_eq!(row.get(5), Some(Pixel::Number(9.0)));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let bad: [&[u8]; 9] = [
            br#"{"not":"an array"}"#,
            b"[[1, 2]]",
            b"[1]",
            br#"[[{"a": 1}]]"#,
            br#"[{"rows": []}]"#,
            b"null",
            b"[null]",
            b"[[null]]",
            b"42",
        ];
        for input in bad {
            assert!(parse_animation(input).is_err(), "accepted {}", String::from_utf8_lossy(input));
        }
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_animation(b"").is_err());
        assert!(parse_animation(b"[[[1,2]]").is_err());
        assert!(parse_animation(b"[[[1]]] [[[2]]]").is_err());
        assert!(parse_animation(b"[[[1e999]]]").is_err());
    }
}
