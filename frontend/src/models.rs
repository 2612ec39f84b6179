#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Inicio", href: "#" },
    NavItem { label: "Menú", href: "#menu" },
    NavItem { label: "Delivery", href: "#delivery" },
    NavItem { label: "Cómo Funciona", href: "#how-it-works" },
    NavItem { label: "Ubicación", href: "#ubicacion" },
    NavItem { label: "Reservaciones", href: "#reservaciones" },
];

#[derive(Debug, Clone, PartialEq)]
pub struct HowItWorksStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const HOW_IT_WORKS: [HowItWorksStep; 3] = [
    HowItWorksStep {
        icon: "🎲",
        title: "Gira la Ruleta",
        description: "Elige girar nuestra ruleta especial y deja que el azar decida tu próxima comida.",
        image: "https://www.jujuydice.com.ar/public/images/noticias/55518-cinco-trucos-para-ganar-la-ruleta-on-line.jpg",
    },
    HowItWorksStep {
        icon: "🍽️",
        title: "Disfruta la Sorpresa",
        description: "Nuestros chefs prepararán la deliciosa comida que la ruleta ha seleccionado para ti.",
        image: "https://images.unsplash.com/photo-1577106263724-2c8e03bfe9cf?auto=format&fit=crop&w=800&q=80",
    },
    HowItWorksStep {
        icon: "🏆",
        title: "Gana Premios",
        description: "Algunos giros te pueden dar premios especiales, descuentos o comidas gratis.",
        image: "https://images.unsplash.com/photo-1607344645866-009c320b63e0?auto=format&fit=crop&w=800&q=80",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub comment: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Carlos Mendoza",
        comment: "¡La experiencia más divertida que he tenido en un restaurante! La ruleta me dio una hamburguesa increíble que nunca hubiera pedido por mi cuenta.",
        rating: 5,
        date: "15/04/2023",
        image: "https://randomuser.me/api/portraits/men/32.jpg",
    },
    Testimonial {
        name: "María Fernández",
        comment: "Me encanta la emoción de no saber qué voy a comer. ¡Y todo está delicioso! Vengo cada semana con mis amigos para probar suerte.",
        rating: 5,
        date: "22/05/2023",
        image: "https://randomuser.me/api/portraits/women/44.jpg",
    },
    Testimonial {
        name: "Javier López",
        comment: "Al principio estaba escéptico, pero la comida es de primera calidad y el concepto es muy original. ¡Definitivamente volveré!",
        rating: 4,
        date: "10/06/2023",
        image: "https://randomuser.me/api/portraits/men/62.jpg",
    },
];

/// Facts shown in the gold strip under the hero.
pub const QUICK_INFO: [(&str, &str); 3] = [
    ("🕒", "Abierto: 11:00 AM - 11:00 PM"),
    ("📞", "Reservas: (123) 456-7890"),
    ("📍", "Av. Casino Real 123, Ciudad"),
];

pub const HERO_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1596731498067-8e0b6ff366cf?auto=format&fit=crop&w=1920&q=80";
