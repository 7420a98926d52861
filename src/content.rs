pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Manifiesto", href: "#manifiesto" },
    NavItem { label: "Mentoria", href: "#mentoria" },
    NavItem { label: "Consultoria", href: "#consultoria" },
];

/// Panels of the horizontal strip in display order: (id, HUD label).
pub const STRIP_PANELS: &[(&str, &str)] = &[
    ("consultoria", "Soluciones Ejecutivas"),
    ("manifiesto", "Manifiesto 2026"),
];

pub fn strip_labels() -> Vec<String> {
    STRIP_PANELS.iter().map(|(_, label)| label.to_string()).collect()
}

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "01",
        title: "Reestructuracion",
        desc: "Analisis forense de quiebra y diseno de nueva arquitectura empresarial.",
    },
    Service {
        id: "02",
        title: "Auditoria de Riesgo",
        desc: "Protocolos de seguridad financiera para prevenir futuros colapsos.",
    },
    Service {
        id: "03",
        title: "Alta Direccion",
        desc: "Metodologia propietaria para integrar maternidad en roles de C-Level.",
    },
    Service {
        id: "04",
        title: "Escalabilidad",
        desc: "Sistemas de crecimiento validados para facturacion recurrente.",
    },
];

pub struct MentoriaCard {
    pub title: &'static str,
    pub quote: &'static str,
    pub sub: &'static str,
}

pub const MENTORIA_CARDS: &[MentoriaCard] = &[
    MentoriaCard {
        title: "Liderazgo",
        quote: "Liderar es asumir responsabilidad antes que reconocimiento.",
        sub: "Tomar decisiones dificiles hoy para construir el futuro que quieres liderar manana.",
    },
    MentoriaCard {
        title: "Autenticidad",
        quote: "No viniste a conformarte. Viniste a ser tu mejor version.",
        sub: "La autenticidad es tu mayor activo financiero.",
    },
    MentoriaCard {
        title: "Reconstruccion",
        quote: "Reconstruirte a ti misma en cada desafio.",
        sub: "Eres mas fuerte de lo que imaginas y mas capaz de lo que te han dicho.",
    },
    MentoriaCard {
        title: "Maestria",
        quote: "Domina tu producto para guiar con verdad.",
        sub: "Cuando entiendes lo que vendes, conectas con ejemplos reales que hacen clic.",
    },
    MentoriaCard {
        title: "Construccion",
        quote: "Los vendedores no nacen, se construyen.",
        sub: "Vender no es cerrar, es abrir puertas de posibilidades ilimitadas.",
    },
];

pub const MANIFIESTO_CHECKLIST: &[&str] = &[
    "Recuperacion de activos en tiempo record",
    "Blindaje legal y financiero",
    "Conciliacion real C-Level",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_panels_are_linked_from_the_menu() {
        assert_eq!(strip_labels().len(), STRIP_PANELS.len());
        for (id, _) in STRIP_PANELS {
            assert!(NAV_ITEMS.iter().any(|item| item.href == format!("#{}", id)));
        }
    }
}
