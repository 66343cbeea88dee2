use serde::{Deserialize, Serialize};

use crate::api;

/// Rendered in place of any missing or empty field.
pub const PLACEHOLDER: &str = "-";

/// A catalog record as the backend returns it, field names included.
/// Every field is optional; the API omits whatever it has no data for.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBook {
    #[serde(default)]
    pub titulo: Option<String>,
    #[serde(default)]
    pub obra: Option<String>,
    #[serde(default)]
    pub edicao: Option<String>,
    #[serde(default)]
    pub ano: Option<String>,
    #[serde(default)]
    pub editora: Option<String>,
    #[serde(rename = "isbnIssn", default)]
    pub isbn_issn: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub idioma: Option<String>,
    #[serde(default)]
    pub assuntos: Option<String>,
    #[serde(rename = "autorPrincipal", default)]
    pub autor_principal: Option<String>,
    #[serde(default)]
    pub autores: Option<String>,
    /// Bare filename of the cover image, e.g. `dune.jpg`.
    #[serde(default)]
    pub imagem: Option<String>,
}

impl RawBook {
    /// Turns the wire record into the displayable one. The cover filename is
    /// resolved against the image base URL here, so the stored record never
    /// carries the bare fragment.
    pub fn resolve(self, image_base_url: &str) -> Book {
        let cover_url = self
            .imagem
            .as_deref()
            .and_then(non_empty)
            .map(|fragment| api::image_url(image_base_url, fragment));

        Book {
            title: self.titulo,
            work: self.obra,
            edition: self.edicao,
            year: self.ano,
            publisher: self.editora,
            isbn: self.isbn_issn,
            material: self.material,
            language: self.idioma,
            subjects: self.assuntos,
            primary_author: self.autor_principal,
            authors: self.autores,
            cover_url,
        }
    }
}

/// A book ready for display. `cover_url`, when present, is always the
/// fully-qualified URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: Option<String>,
    pub work: Option<String>,
    pub edition: Option<String>,
    pub year: Option<String>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub material: Option<String>,
    pub language: Option<String>,
    pub subjects: Option<String>,
    pub primary_author: Option<String>,
    pub authors: Option<String>,
    pub cover_url: Option<String>,
}

impl Book {
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::PrimaryAuthor => self.primary_author.as_deref(),
            Field::Authors => self.authors.as_deref(),
            Field::Year => self.year.as_deref(),
            Field::Publisher => self.publisher.as_deref(),
            Field::Isbn => self.isbn.as_deref(),
            Field::Material => self.material.as_deref(),
            Field::Edition => self.edition.as_deref(),
            Field::Language => self.language.as_deref(),
            Field::Subjects => self.subjects.as_deref(),
        }
    }
}

/// One labelled row on the detail card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PrimaryAuthor,
    Authors,
    Year,
    Publisher,
    Isbn,
    Material,
    Edition,
    Language,
    Subjects,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::PrimaryAuthor => "Autor",
            Field::Authors => "Autores",
            Field::Year => "Ano",
            Field::Publisher => "Editora",
            Field::Isbn => "ISBN",
            Field::Material => "Material",
            Field::Edition => "Edição",
            Field::Language => "Idioma",
            Field::Subjects => "Assuntos",
        }
    }
}

/// The two catalogs the app can point at. Same screen, different field set
/// and title composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Sede,
    Biblioteca,
}

impl Variant {
    pub fn endpoint(self) -> &'static str {
        match self {
            Variant::Sede => "LivrosSedeApi",
            Variant::Biblioteca => "LivrosBibliotecaApi",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            Variant::Sede => &[
                Field::PrimaryAuthor,
                Field::Year,
                Field::Publisher,
                Field::Isbn,
                Field::Material,
                Field::Edition,
            ],
            Variant::Biblioteca => &[
                Field::PrimaryAuthor,
                Field::Authors,
                Field::Year,
                Field::Publisher,
                Field::Isbn,
                Field::Material,
                Field::Edition,
                Field::Language,
                Field::Subjects,
            ],
        }
    }

    /// The biblioteca catalog prefixes the work name to the title.
    pub fn compose_title(self, book: &Book) -> String {
        let title = book.title.as_deref().and_then(non_empty);
        match self {
            Variant::Sede => title.unwrap_or(PLACEHOLDER).to_string(),
            Variant::Biblioteca => {
                let work = book.work.as_deref().and_then(non_empty);
                match (work, title) {
                    (Some(work), Some(title)) => format!("{work}: {title}"),
                    (Some(work), None) => work.to_string(),
                    (None, Some(title)) => title.to_string(),
                    (None, None) => PLACEHOLDER.to_string(),
                }
            }
        }
    }
}

pub fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

pub fn display_or_dash(value: Option<&str>) -> &str {
    value.and_then(non_empty).unwrap_or(PLACEHOLDER)
}
