//! Static copy, roster and asset paths.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const ORGANIZATION: &str = "Cercle Emir Abdelkader";
pub const LEGAL_FORM: &str = "Association loi 1901";
pub const TAGLINE: &str = "Elus engagés pour les relations entre la France et l'Algérie";
pub const CITY: &str = "Paris, France";
pub const EMAIL: &str = "contact@cercleemirabdelkader.org";

pub const LOGO: &str = "logo-cea-2048x2048.png";
pub const GROUP_PHOTO: &str = "photo-groupe-1-e1700957040835.png";
const MEMBER_PLACEHOLDER: &str = "https://placehold.co/400x400";

pub const FILLER: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed vitae mi non augue mollis tincidunt. Integer auctor, lectus id pulvinar convallis, arcu sem ultrices elit, in tempor ante augue id turpis. Pellentesque habitant morbi tristique senectus et netus et malesuada fames ac turpis egestas.";

/// Number of pictures in each article's grid.
pub const PICTURES_PER_ARTICLE: u32 = 3;

/// A board member card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    pub role: &'static str,
    pub name: &'static str,
    pub photo: &'static str,
}

/// An entry on the Actions or Meetings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Article {
    /// In-page anchor id.
    pub id: &'static str,
    pub title: &'static str,
    /// Keyword used to pick placeholder pictures.
    pub picture_query: &'static str,
}

pub const BOARD: &[Member] = &[
    Member { role: "Président", name: "Nom Prénom", photo: MEMBER_PLACEHOLDER },
    Member { role: "Vice-président", name: "Nom Prénom", photo: MEMBER_PLACEHOLDER },
    Member { role: "Vice-président", name: "Nom Prénom", photo: MEMBER_PLACEHOLDER },
    Member { role: "Secrétaire", name: "Nom Prénom", photo: MEMBER_PLACEHOLDER },
    Member { role: "Secrétaire adjoint", name: "Nom Prénom", photo: MEMBER_PLACEHOLDER },
    Member { role: "Trésorier", name: "Nom Prénom", photo: MEMBER_PLACEHOLDER },
];

pub const ACTIONS: &[Article] = &[
    Article { id: "action1", title: "Action 1", picture_query: "cooperation1" },
    Article { id: "action2", title: "Action 2", picture_query: "cooperation2" },
    Article { id: "action3", title: "Action 3", picture_query: "cooperation3" },
];

pub const MEETINGS: &[Article] = &[
    Article { id: "rencontre1", title: "Rencontre 1", picture_query: "dialogue1" },
    Article { id: "rencontre2", title: "Rencontre 2", picture_query: "dialogue2" },
    Article { id: "rencontre3", title: "Rencontre 3", picture_query: "dialogue3" },
];

/// Placeholder picture `index` (1-based) for an article keyword.
pub fn picture_url(query: &str, index: u32) -> String {
    format!("https://placehold.co/800x500/?{query},people,meeting&sig={index}")
}

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}
