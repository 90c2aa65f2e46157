// Fixed preview copy: section headings and the placeholders shown for empty sections.

pub const NAME_PLACEHOLDER: &str = "Seu nome completo";
pub const SUMMARY_PLACEHOLDER: &str = "Apresente um panorama conciso da sua experiência e impacto.";
pub const EXPERIENCE_PLACEHOLDER: &str = "Inclua empresas, cargos e resultados alcançados.";
pub const EDUCATION_PLACEHOLDER: &str = "Adicione seus cursos, instituições e anos de conclusão.";
pub const SKILLS_PLACEHOLDER: &str =
    "Liste habilidades técnicas, ferramentas e competências comportamentais.";

pub const SUMMARY_HEADING: &str = "Resumo Profissional";
pub const EXPERIENCE_HEADING: &str = "Experiência Profissional";
pub const EDUCATION_HEADING: &str = "Formação Acadêmica";
pub const SKILLS_HEADING: &str = "Competências";
pub const ADDITIONAL_HEADING: &str = "Seções Adicionais";

pub const LINKEDIN_LABEL: &str = "LinkedIn";
