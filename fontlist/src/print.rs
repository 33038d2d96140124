//! Text and JSON output.

use std::io::{self, Write};

use font_ident::TypographicFont;
use serde::Serialize;

use crate::{face_label, FontFamily};

#[derive(Serialize)]
struct FamilyReport<'a> {
    name: &'a str,
    monospaced: bool,
    faces: Vec<FaceReport<'a>>,
}

#[derive(Serialize)]
struct FaceReport<'a> {
    label: String,
    normal: bool,
    font: &'a TypographicFont,
}

impl<'a> FamilyReport<'a> {
    fn new(family: &'a FontFamily) -> Self {
        let normal = family.normal_face();
        let faces = family
            .faces()
            .iter()
            .map(|font| FaceReport {
                label: face_label(font),
                normal: normal.is_some_and(|n| std::ptr::eq(n, font)),
                font,
            })
            .collect();
        FamilyReport {
            name: family.name(),
            monospaced: family.is_monospaced(),
            faces,
        }
    }
}

/// Families under "Proportional" and "Monospaced" headings, one face per
/// line. The normal face is marked with `*`.
pub fn write_families(out: &mut impl Write, families: &[FontFamily]) -> io::Result<()> {
    let (mono, proportional): (Vec<_>, Vec<_>) =
        families.iter().partition(|family| family.is_monospaced());
    for (heading, group) in [("Proportional", proportional), ("Monospaced", mono)] {
        if group.is_empty() {
            continue;
        }
        writeln!(out, "{heading}")?;
        for family in group {
            writeln!(out, "  {}", family.name())?;
            let report = FamilyReport::new(family);
            for face in &report.faces {
                let marker = if face.normal { '*' } else { ' ' };
                writeln!(
                    out,
                    "   {marker} {:<24} {:>4}  {}",
                    face.label,
                    face.font.weight().to_u16(),
                    face.font.file_name().display()
                )?;
            }
        }
    }
    Ok(())
}

/// One line per face, in the order given.
pub fn write_fonts(out: &mut impl Write, fonts: &[TypographicFont]) -> io::Result<()> {
    for font in fonts {
        writeln!(
            out,
            "{}\t{}\t{}",
            font,
            font.weight().to_u16(),
            font.file_name().display()
        )?;
    }
    Ok(())
}

pub fn write_families_json(out: &mut impl Write, families: &[FontFamily]) -> io::Result<()> {
    let reports: Vec<_> = families.iter().map(FamilyReport::new).collect();
    serde_json::to_writer_pretty(&mut *out, &reports)?;
    writeln!(out)
}

pub fn write_fonts_json(out: &mut impl Write, fonts: &[TypographicFont]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, fonts)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use font_types::SelectionFlags;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::family::tests::face;

    fn families() -> Vec<FontFamily> {
        FontFamily::group([
            face("Sans", None, 700, SelectionFlags::BOLD),
            face("Sans", None, 400, SelectionFlags::REGULAR),
            face("Serif", Some("Book"), 400, SelectionFlags::empty()),
        ])
    }

    #[test]
    fn grouped_text() {
        let mut out = Vec::new();
        write_families(&mut out, &families()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().map(str::trim_end).collect();
        assert_eq!(
            lines,
            [
                "Proportional",
                "  Sans",
                "   * Regular                   400  Sans-400.ttf",
                "     Regular Bold              700  Sans-700.ttf",
                "  Serif",
                "   * Book                      400  Serif-400.ttf",
            ]
        );
    }

    #[test]
    fn flat_text() {
        let fonts = [face("Serif", Some("Book"), 400, SelectionFlags::empty())];
        let mut out = Vec::new();
        write_fonts(&mut out, &fonts).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Serif Book\t400\tSerif-400.ttf\n"
        );
    }

    #[test]
    fn grouped_json() {
        let mut out = Vec::new();
        write_families_json(&mut out, &families()).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[0]["name"], "Sans");
        assert_eq!(json[0]["monospaced"], false);
        assert_eq!(json[0]["faces"][0]["label"], "Regular");
        assert_eq!(json[0]["faces"][0]["normal"], true);
        assert_eq!(json[0]["faces"][1]["normal"], false);
        assert_eq!(json[1]["faces"][0]["font"]["os2"]["weight"], 400);
    }
}
