//! Roster export in plain text, JSON and XML.
//!
//! Each format is an [`ExportVisitor`]: [`render`] walks every ninja and then
//! every mission through the visitor and asks it for the finished document.

use konoha_core::error::CoreError;
use konoha_core::types::Timestamp;
use konoha_db::models::mission::Mission;
use konoha_db::models::ninja::Ninja;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Format selection
// ---------------------------------------------------------------------------

pub const FORMAT_TEXT: &str = "texto";
pub const FORMAT_JSON: &str = "json";
pub const FORMAT_XML: &str = "xml";

pub const VALID_FORMATS: &[&str] = &[FORMAT_TEXT, FORMAT_JSON, FORMAT_XML];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
    Xml,
}

impl ExportFormat {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            FORMAT_TEXT => Ok(Self::Text),
            FORMAT_JSON => Ok(Self::Json),
            FORMAT_XML => Ok(Self::Xml),
            _ => Err(CoreError::Validation(format!(
                "Formato de exportación inválido '{s}'. Debe ser uno de: {}",
                VALID_FORMATS.join(", ")
            ))),
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Text => "text/plain; charset=utf-8",
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Text => "reporte_ninjas.txt",
            Self::Json => "reporte_ninjas.json",
            Self::Xml => "reporte_ninjas.xml",
        }
    }
}

// ---------------------------------------------------------------------------
// Visitor
// ---------------------------------------------------------------------------

/// Accumulates one export document.
///
/// Ninjas are always visited before missions.
pub trait ExportVisitor<'a> {
    fn visit_ninja(&mut self, ninja: &'a Ninja);
    fn visit_mission(&mut self, mission: &'a Mission);
    fn finish(self) -> Result<String, CoreError>;
}

/// Render the whole roster in `format`.
pub fn render(
    format: ExportFormat,
    ninjas: &[Ninja],
    missions: &[Mission],
    exported_at: Timestamp,
) -> Result<String, CoreError> {
    match format {
        ExportFormat::Text => walk(TextExporter::default(), ninjas, missions),
        ExportFormat::Json => walk(JsonExporter::new(exported_at), ninjas, missions),
        ExportFormat::Xml => walk(XmlExporter::new(exported_at), ninjas, missions),
    }
}

fn walk<'a, V: ExportVisitor<'a>>(
    mut visitor: V,
    ninjas: &'a [Ninja],
    missions: &'a [Mission],
) -> Result<String, CoreError> {
    for ninja in ninjas {
        visitor.visit_ninja(ninja);
    }
    for mission in missions {
        visitor.visit_mission(mission);
    }
    visitor.finish()
}

const BANNER: &str = "========================================";

// ---------------------------------------------------------------------------
// Plain text
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TextExporter {
    out: String,
}

impl<'a> ExportVisitor<'a> for TextExporter {
    fn visit_ninja(&mut self, n: &'a Ninja) {
        let jutsus = if n.abilities.is_empty() {
            "Ninguno".to_string()
        } else {
            n.abilities.as_slice().join(", ")
        };
        self.out.push_str(&format!(
            "{BANNER}\nNINJA: {}\n{BANNER}\n\
             Rango: {}\nAldea: {}\nEstadísticas:\n\
             \x20 - Ataque: {}\n\x20 - Defensa: {}\n\x20 - Chakra: {}\n\
             Jutsus: {jutsus}\nFecha de Registro: {}\n\n",
            n.name,
            n.rank,
            n.village,
            n.attack,
            n.defense,
            n.chakra,
            n.registered_at.format("%Y-%m-%d"),
        ));
    }

    fn visit_mission(&mut self, m: &'a Mission) {
        self.out.push_str(&format!(
            "{BANNER}\nMISIÓN: {}\n{BANNER}\n\
             Rango: {}\nRecompensa: {} Ryō\nDescripción: {}\n\
             Fecha de Creación: {}\n\n",
            m.name,
            m.rank,
            m.reward,
            m.description,
            m.created_at.format("%Y-%m-%d"),
        ));
    }

    fn finish(self) -> Result<String, CoreError> {
        Ok(self.out)
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct JsonExporter<'a> {
    #[serde(rename = "fecha_exportacion")]
    exported_at: Timestamp,
    total_ninjas: usize,
    #[serde(rename = "total_misiones")]
    total_missions: usize,
    ninjas: Vec<&'a Ninja>,
    #[serde(rename = "misiones")]
    missions: Vec<&'a Mission>,
}

impl JsonExporter<'_> {
    pub fn new(exported_at: Timestamp) -> Self {
        Self {
            exported_at,
            total_ninjas: 0,
            total_missions: 0,
            ninjas: Vec::new(),
            missions: Vec::new(),
        }
    }
}

impl<'a> ExportVisitor<'a> for JsonExporter<'a> {
    fn visit_ninja(&mut self, ninja: &'a Ninja) {
        self.ninjas.push(ninja);
        self.total_ninjas += 1;
    }

    fn visit_mission(&mut self, mission: &'a Mission) {
        self.missions.push(mission);
        self.total_missions += 1;
    }

    fn finish(self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self).map_err(|e| CoreError::Internal(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// XML
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct XmlExporter {
    out: String,
    in_missions: bool,
}

impl XmlExporter {
    pub fn new(exported_at: Timestamp) -> Self {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<sistema_ninjas>\n");
        out.push_str(&format!(
            "  <fecha_exportacion>{}</fecha_exportacion>\n  <ninjas>\n",
            exported_at.to_rfc3339()
        ));
        Self {
            out,
            in_missions: false,
        }
    }

    fn open_missions(&mut self) {
        if !self.in_missions {
            self.out.push_str("  </ninjas>\n  <misiones>\n");
            self.in_missions = true;
        }
    }
}

/// Wrap free text in CDATA, splitting any `]]>` that would end it early.
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

impl<'a> ExportVisitor<'a> for XmlExporter {
    fn visit_ninja(&mut self, n: &'a Ninja) {
        let mut jutsus = String::new();
        for jutsu in n.abilities.as_slice() {
            jutsus.push_str(&format!("        <jutsu>{}</jutsu>\n", cdata(jutsu)));
        }
        self.out.push_str(&format!(
            "    <ninja>\n\
             \x20     <id>{}</id>\n\
             \x20     <nombre>{}</nombre>\n\
             \x20     <rango>{}</rango>\n\
             \x20     <aldea>{}</aldea>\n\
             \x20     <estadisticas>\n\
             \x20       <ataque>{}</ataque>\n\
             \x20       <defensa>{}</defensa>\n\
             \x20       <chakra>{}</chakra>\n\
             \x20     </estadisticas>\n\
             \x20     <jutsus>\n{jutsus}      </jutsus>\n\
             \x20     <fecha_registro>{}</fecha_registro>\n\
             \x20   </ninja>\n",
            n.id,
            cdata(&n.name),
            n.rank,
            cdata(&n.village),
            n.attack,
            n.defense,
            n.chakra,
            n.registered_at.to_rfc3339(),
        ));
    }

    fn visit_mission(&mut self, m: &'a Mission) {
        self.open_missions();
        self.out.push_str(&format!(
            "    <mision>\n\
             \x20     <id>{}</id>\n\
             \x20     <nombre>{}</nombre>\n\
             \x20     <rango>{}</rango>\n\
             \x20     <recompensa>{}</recompensa>\n\
             \x20     <descripcion>{}</descripcion>\n\
             \x20     <fecha_creacion>{}</fecha_creacion>\n\
             \x20   </mision>\n",
            m.id,
            cdata(&m.name),
            m.rank,
            m.reward,
            cdata(&m.description),
            m.created_at.to_rfc3339(),
        ));
    }

    fn finish(mut self) -> Result<String, CoreError> {
        self.open_missions();
        self.out.push_str("  </misiones>\n</sistema_ninjas>");
        Ok(self.out)
    }
}
