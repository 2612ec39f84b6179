pub const RESTAURANT_NAME: &str = "RouletteBite";
pub const RESTAURANT_TAGLINE: &str = "Donde la emoción del casino se encuentra con la comida rápida.";
pub const RESTAURANT_ADDRESS: &str = "Av. Casino Real 123, Ciudad, CP 12345";
pub const RESTAURANT_ADDRESS_HINT: &str = "A 5 minutos del centro comercial";
pub const RESTAURANT_PHONE: &str = "(123) 456-7890";
pub const RESTAURANT_EMAIL: &str = "info@roulettebite.com";
pub const MAPS_URL: &str = "https://goo.gl/maps/1J9EYmgugF7XzVQS6";

// Wheel spin parameters
pub const MIN_SPIN_TURNS: f64 = 2.0;     // Full rotations every spin makes
pub const EXTRA_SPIN_TURNS: f64 = 3.0;   // Upper bound (exclusive) of the random extra rotation
pub const MIN_SPIN_DURATION_MS: f64 = 3000.0;
pub const MAX_SPIN_DURATION_MS: f64 = 5000.0;

// Delivery pricing, in cents
pub const FREE_DELIVERY_THRESHOLD_CENTS: u32 = 2500;
pub const DELIVERY_FEE_CENTS: u32 = 399;
pub const MAX_LINE_QUANTITY: u32 = 99;
pub const DELIVERY_TIME: &str = "30-45 min";
pub const DELIVERY_RADIUS: &str = "Radio de 10 km";
pub const ORDER_CONFIRMATION_MS: u32 = 3000;

pub const RESERVATION_TIME_SLOTS: [&str; 12] = [
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30",
    "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
];

pub const OPENING_HOURS: [(&str, &str); 3] = [
    ("Lunes - Jueves", "11:00 AM - 10:00 PM"),
    ("Viernes - Sábado", "11:00 AM - 12:00 AM"),
    ("Domingo", "12:00 PM - 9:00 PM"),
];

pub const MISSING_ADDRESS_ERROR: &str = "Ingresa tu dirección de entrega";
pub const INVALID_PHONE_ERROR: &str = "Ingresa un número de teléfono válido";
pub const INVALID_DATE_ERROR: &str = "Selecciona una fecha válida";
pub const DATE_IN_PAST_ERROR: &str = "La fecha no puede ser anterior a hoy";
pub const UNKNOWN_TIME_SLOT_ERROR: &str = "Selecciona un horario disponible";
pub const GENERIC_FORM_ERROR: &str = "Revisa los datos del formulario";

pub const MIN_PHONE_DIGITS: usize = 7;
