use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    /// Free-text date range, e.g. "Março 2021 – Presente".
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year: i32,
}

/// Aggregate root. Experience and education keep insertion order, which is
/// also display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resume {
    pub profile: Profile,
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub education: Vec<Education>,
}

/// Top-level résumé fields, as reported by a patch application.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResumeField {
    Profile,
    Experience,
    Skills,
    Education,
}

impl ResumeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeField::Profile => "profile",
            ResumeField::Experience => "experience",
            ResumeField::Skills => "skills",
            ResumeField::Education => "education",
        }
    }
}

/// A partial résumé. Every present field replaces the whole current value;
/// nested records are never merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<Experience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Skills>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,
}

impl ResumePatch {
    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
            && self.experience.is_none()
            && self.skills.is_none()
            && self.education.is_none()
    }

    /// Shallow merge into `resume`. Returns the fields that were replaced, in
    /// declaration order.
    pub fn apply(self, resume: &mut Resume) -> Vec<ResumeField> {
        let mut replaced = Vec::new();
        if let Some(profile) = self.profile {
            resume.profile = profile;
            replaced.push(ResumeField::Profile);
        }
        if let Some(experience) = self.experience {
            resume.experience = experience;
            replaced.push(ResumeField::Experience);
        }
        if let Some(skills) = self.skills {
            resume.skills = skills;
            replaced.push(ResumeField::Skills);
        }
        if let Some(education) = self.education {
            resume.education = education;
            replaced.push(ResumeField::Education);
        }
        replaced
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Sample résumé every new store starts from.
impl Default for Resume {
    fn default() -> Self {
        Resume {
            profile: Profile {
                name: "Seu Nome Completo".to_string(),
                location: "Cidade, Estado".to_string(),
                phone: "(00) 00000-0000".to_string(),
                email: "email@exemplo.com".to_string(),
                linkedin: Some("https://linkedin.com/in/usuario".to_string()),
                portfolio: Some("https://github.com/usuario".to_string()),
                summary: "Desenvolvedor Full Stack especializado em ecossistemas modernos de \
                          JavaScript. Experiência em arquitetura de componentes escaláveis e \
                          otimização de performance para aplicações web de larga escala."
                    .to_string(),
            },
            experience: vec![
                Experience {
                    role: "Desenvolvedor Frontend Sênior".to_string(),
                    company: "Empresa de Tecnologia S.A.".to_string(),
                    location: "São Paulo, SP (Remoto)".to_string(),
                    period: "Março 2021 – Presente".to_string(),
                    bullets: strings(&[
                        "Desenvolvimento de interfaces reativas utilizando Vue.js e Tailwind CSS \
                         para mais de 1 milhão de usuários ativos.",
                        "Redução do tempo de carregamento da aplicação em 35% através de técnicas \
                         de code-splitting e lazy loading.",
                        "Mentoria de desenvolvedores juniores e condução de code reviews focados \
                         em boas práticas e segurança.",
                    ]),
                },
                Experience {
                    role: "Desenvolvedor Web Pleno".to_string(),
                    company: "Agência Digital X".to_string(),
                    location: "Rio de Janeiro, RJ".to_string(),
                    period: "Janeiro 2019 – Fevereiro 2021".to_string(),
                    bullets: strings(&[
                        "Criação de dashboards administrativos complexos com integração via REST \
                         APIs.",
                        "Implementação de fluxos de CI/CD, agilizando o deploy de novas features \
                         em 50%.",
                    ]),
                },
            ],
            // Technologies and tools are both hard skills.
            skills: Skills {
                hard_skills: strings(&[
                    "Vue.js",
                    "React",
                    "Node.js",
                    "TypeScript",
                    "Tailwind CSS",
                    "SQL",
                    "Git",
                    "Docker",
                    "AWS",
                    "Jira",
                    "Figma",
                ]),
                soft_skills: Vec::new(),
            },
            education: vec![Education {
                degree: "Graduação em Engenharia de Software".to_string(),
                institution: "Universidade Federal".to_string(),
                year: 2018,
            }],
        }
    }
}
