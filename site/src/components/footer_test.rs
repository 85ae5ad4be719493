use super::*;

#[test]
fn copyright_line_includes_year_and_name() {
    assert_eq!(
        copyright_line(2025),
        "© 2025 Cercle Emir Abdelkader — Tous droits réservés."
    );
}
