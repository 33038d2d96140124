//! Grouping faces into families.

use std::collections::BTreeMap;

use font_ident::TypographicFont;
use font_types::WeightClass;

/// The faces that share a typographic family name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontFamily {
    name: String,
    /// Sorted by weight; faces of equal weight keep their input order.
    faces: Vec<TypographicFont>,
}

impl FontFamily {
    /// Group faces by [`TypographicFont::family`].
    ///
    /// Families are returned sorted by name.
    pub fn group(fonts: impl IntoIterator<Item = TypographicFont>) -> Vec<FontFamily> {
        let mut by_name: BTreeMap<String, Vec<TypographicFont>> = BTreeMap::new();
        for font in fonts {
            by_name.entry(font.family().to_owned()).or_default().push(font);
        }
        by_name
            .into_iter()
            .map(|(name, mut faces)| {
                faces.sort_by_key(TypographicFont::weight);
                FontFamily { name, faces }
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faces(&self) -> &[TypographicFont] {
        &self.faces
    }

    /// The face that stands for the family in a list of families.
    ///
    /// This is the first face with the REGULAR selection bit; failing that,
    /// the upright face closest to normal weight, and failing that the face
    /// closest to normal weight.
    pub fn normal_face(&self) -> Option<&TypographicFont> {
        let by_distance = |font: &&TypographicFont| {
            (font.weight().distance(WeightClass::NORMAL), font.weight())
        };
        self.faces
            .iter()
            .find(|font| font.regular())
            .or_else(|| {
                self.faces
                    .iter()
                    .filter(|font| !font.italic() && !font.oblique())
                    .min_by_key(by_distance)
            })
            .or_else(|| self.faces.iter().min_by_key(by_distance))
    }

    /// `true` if the family's normal face is classified as monospaced.
    pub fn is_monospaced(&self) -> bool {
        self.normal_face().is_some_and(TypographicFont::is_monospaced)
    }
}

/// The label for a face within its family.
///
/// This is the subfamily name when there is one, otherwise a name built
/// from the style bits, such as "Regular Bold Italic".
pub fn face_label(font: &TypographicFont) -> String {
    if let Some(sub_family) = font.sub_family() {
        return sub_family.to_owned();
    }
    let mut label = String::from("Regular");
    if font.bold() {
        label.push_str(" Bold");
    }
    if font.italic() {
        label.push_str(" Italic");
    }
    label
}

#[cfg(test)]
pub(crate) mod tests {
    use font_ident::{FamilyNamesInfo, Os2Info};
    use font_types::{Panose, SelectionFlags, Tag};
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) fn face(
        family: &str,
        sub_family: Option<&str>,
        weight: u16,
        style: SelectionFlags,
    ) -> TypographicFont {
        let names = FamilyNamesInfo {
            typographic_family: family.into(),
            typographic_subfamily: sub_family.map(Into::into),
            font_name: family.into(),
            sub_family: sub_family.map(Into::into),
        };
        let os2 = Os2Info {
            weight: WeightClass::new(weight),
            style,
            panose: Panose::default(),
            version: 4,
            vendor: Tag::new(b"TEST"),
        };
        TypographicFont::new(names, os2, format!("{family}-{weight}.ttf"))
    }

    fn mono(font: TypographicFont, panose: [u8; 10]) -> TypographicFont {
        let mut os2 = font.os2().clone();
        os2.panose = Panose::new(panose);
        TypographicFont::new(font.family_names().clone(), os2, font.file_name())
    }

    fn weights(family: &FontFamily) -> Vec<u16> {
        family.faces().iter().map(|f| f.weight().to_u16()).collect()
    }

    #[test]
    fn grouped_by_family_and_sorted_by_weight() {
        let families = FontFamily::group([
            face("Sans", None, 700, SelectionFlags::BOLD),
            face("Serif", None, 400, SelectionFlags::REGULAR),
            face("Sans", None, 300, SelectionFlags::empty()),
            face("Sans", None, 400, SelectionFlags::REGULAR),
        ]);
        let names: Vec<_> = families.iter().map(FontFamily::name).collect();
        assert_eq!(names, ["Sans", "Serif"]);
        assert_eq!(weights(&families[0]), [300, 400, 700]);
        assert_eq!(weights(&families[1]), [400]);
    }

    #[test]
    fn normal_face_prefers_regular_bit() {
        let families = FontFamily::group([
            face("Sans", Some("Book"), 400, SelectionFlags::empty()),
            face("Sans", Some("Medium"), 500, SelectionFlags::REGULAR),
        ]);
        let normal = families[0].normal_face().unwrap();
        assert_eq!(normal.sub_family(), Some("Medium"));
    }

    #[test]
    fn normal_face_falls_back_to_upright_near_400() {
        let families = FontFamily::group([
            face("Sans", Some("Italic"), 400, SelectionFlags::ITALIC),
            face("Sans", Some("Light"), 300, SelectionFlags::empty()),
            face("Sans", Some("Medium"), 500, SelectionFlags::empty()),
            face("Sans", Some("Bold"), 700, SelectionFlags::BOLD),
        ]);
        // 300 and 500 are equally close; the lighter wins
        let normal = families[0].normal_face().unwrap();
        assert_eq!(normal.sub_family(), Some("Light"));
    }

    #[test]
    fn normal_face_of_italic_only_family() {
        let families = FontFamily::group([
            face("Script", None, 700, SelectionFlags::ITALIC),
            face("Script", None, 400, SelectionFlags::ITALIC),
        ]);
        assert_eq!(
            families[0].normal_face().map(|f| f.weight()),
            Some(WeightClass::NORMAL)
        );
    }

    #[test]
    fn monospaced_follows_normal_face() {
        let panose_mono = [2, 11, 6, 9, 2, 2, 4, 3, 2, 4];
        let families = FontFamily::group([
            mono(face("Code", None, 400, SelectionFlags::REGULAR), panose_mono),
            face("Code", None, 700, SelectionFlags::BOLD),
            face("Text", None, 400, SelectionFlags::REGULAR),
        ]);
        assert!(families[0].is_monospaced());
        assert!(!families[1].is_monospaced());
    }

    #[test]
    fn labels() {
        let named = face("Sans", Some("Condensed"), 400, SelectionFlags::BOLD);
        assert_eq!(face_label(&named), "Condensed");
        for (style, label) in [
            (SelectionFlags::REGULAR, "Regular"),
            (SelectionFlags::BOLD, "Regular Bold"),
            (SelectionFlags::ITALIC, "Regular Italic"),
            (SelectionFlags::BOLD | SelectionFlags::ITALIC, "Regular Bold Italic"),
        ] {
            assert_eq!(face_label(&face("Sans", None, 400, style)), label);
        }
    }
}
