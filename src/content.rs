/// Static page copy (Portuguese, as published)

use crate::state::nav::Section;

/// Label of the "no filter" chip
pub const ALL_LABEL: &str = "Todos";

pub const HERO_TITLE: (&str, &str) = ("CONGELE A ", "EMOÇÃO");
pub const HERO_TAGLINE: &str = "Fotografia esportiva profissional que captura o auge da performance, \
a intensidade do jogo e a alma do atleta.";
pub const HERO_PRIMARY_CTA: &str = "Ver Portfólio";
pub const HERO_SECONDARY_CTA: &str = "Trabalhe Comigo";

pub const PORTFOLIO_TITLE: &str = "Portfólio";
pub const PORTFOLIO_BLURB: &str =
    "Uma seleção dos melhores momentos capturados em diversas modalidades.";
pub const TILE_HINT: &str = "Ver Ampliada";

pub const ABOUT_TITLE: (&str, &str) = ("O Olhar Por Trás ", "Da Lente");
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Olá, sou um fotógrafo especializado em capturar a essência crua dos esportes. \
Para mim, a fotografia não é apenas sobre o resultado final, mas sobre a jornada, \
o esforço e o suor que levam ao pódio.",
    "Com mais de 10 anos cobrindo eventos nacionais e internacionais, meu objetivo é \
imortalizar momentos que duram frações de segundo, mas que contam histórias de uma \
vida inteira de dedicação.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 2] = [
    Stat {
        value: "500+",
        label: "Eventos Cobertos",
    },
    Stat {
        value: "12",
        label: "Países Visitados",
    },
];

pub const SERVICES_TITLE: &str = "Serviços";

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Cobertura de Eventos",
        description: "Captura profissional de torneios, campeonatos e competições de alto nível.",
    },
    Service {
        title: "Sessões para Atletas",
        description: "Portfólio dinâmico focado na performance individual e técnica do esportista.",
    },
    Service {
        title: "Clubes e Marcas",
        description: "Produção de conteúdo visual para campanhas publicitárias e redes sociais de times.",
    },
];
pub const SERVICE_LINK: &str = "Saiba mais ›";

pub const CONTACT_TITLE: (&str, &str) = ("Vamos Criar ", "Impacto?");
pub const CONTACT_BLURB: &str = "Pronto para elevar o nível das imagens do seu evento ou marca? \
Entre em contato e vamos conversar sobre seu próximo projeto.";
pub const CONTACT_EMAIL_LABEL: &str = "Email Profissional";
pub const CONTACT_EMAIL: &str = "contato@actionphoto.com";
pub const SOCIALS: [&str; 3] = ["Instagram", "Facebook", "Twitter"];

pub const FORM_NAME: (&str, &str) = ("Seu Nome", "Ex: João Silva");
pub const FORM_EMAIL: (&str, &str) = ("Seu Email", "Ex: joao@email.com");
pub const FORM_MESSAGE: (&str, &str) = ("Sua Mensagem", "Como posso ajudar seu projeto?");
pub const FORM_SUBMIT: &str = "Enviar Mensagem";

pub const FOOTER_TAGLINE: &str = "Especialista em Fotografia Esportiva de Alto Rendimento";

pub const SPLASH_TEXT: &str = "Carregando";

/// Navbar label for a section
pub fn section_label(section: Section) -> &'static str {
    match section {
        Section::Home => "Início",
        Section::Portfolio => "Portfólio",
        Section::About => "Sobre",
        Section::Services => "Serviços",
        Section::Contact => "Contato",
    }
}

/// Footer copyright line for the given year
pub fn copyright(year: i32, brand: &str) -> String {
    format!("© {year} {brand} Portfólio. Todos os direitos reservados.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright(2024, "Action Photo"),
            "© 2024 Action Photo Portfólio. Todos os direitos reservados."
        );
    }

    #[test]
    fn test_every_section_has_a_label() {
        for section in Section::ALL {
            assert!(!section_label(section).is_empty());
        }
    }
}
