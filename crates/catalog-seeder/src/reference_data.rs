//! Literal reference data submitted on every run.

use crate::seed::{CategorySeed, UserSeed};

const DEFAULT_PASSWORD: &str = "password123";

/// Users created before any product.
pub const USERS: [UserSeed; 7] = [
    user("Juan Pérez", "juan.perez@email.com"),
    user("María García", "maria.garcia@email.com"),
    user("Carlos López", "carlos.lopez@email.com"),
    user("Ana Martínez", "ana.martinez@email.com"),
    user("Pedro Rodríguez", "pedro.rodriguez@email.com"),
    user("Laura Fernández", "laura.fernandez@email.com"),
    user("Diego Sánchez", "diego.sanchez@email.com"),
];

/// Categories products are filed under.
pub const CATEGORIES: [CategorySeed; 10] = [
    category("Electrónicos", "Dispositivos y aparatos electrónicos"),
    category("Gaming", "Productos para videojuegos y entretenimiento"),
    category("Computación", "Equipos de cómputo y accesorios"),
    category("Hogar", "Artículos para el hogar y decoración"),
    category("Deportes", "Equipamiento deportivo y fitness"),
    category("Moda", "Ropa, calzado y accesorios"),
    category("Libros", "Libros físicos y digitales"),
    category("Música", "Instrumentos musicales y audio"),
    category("Smartphones", "Teléfonos móviles y accesorios"),
    category("Audio", "Audífonos, bocinas y equipos de sonido"),
];

/// Leading noun of generated product names.
pub const PRODUCT_PREFIXES: [&str; 25] = [
    "Laptop",
    "Mouse",
    "Teclado",
    "Monitor",
    "Auriculares",
    "Smartphone",
    "Tablet",
    "Cámara",
    "Impresora",
    "Disco Duro",
    "Memoria RAM",
    "Procesador",
    "Tarjeta Gráfica",
    "Consola",
    "Control",
    "Micrófono",
    "Webcam",
    "Router",
    "Switch",
    "Cable",
    "Escritorio",
    "Silla",
    "Lámpara",
    "Ventilador",
    "Altavoz",
];

/// Qualifier placed after the prefix. "Profesional" is listed twice.
pub const ADJECTIVES: [&str; 21] = [
    "Gaming",
    "Pro",
    "Ultra",
    "Max",
    "Plus",
    "Premium",
    "Inalámbrico",
    "RGB",
    "Mecánico",
    "Portátil",
    "Compacto",
    "Profesional",
    "Avanzado",
    "Básico",
    "Económico",
    "Profesional",
    "Deportivo",
    "Elegante",
    "Resistente",
    "Ligerísimo",
    "Potente",
];

const fn user(name: &'static str, email: &'static str) -> UserSeed {
    UserSeed {
        name,
        email,
        password: DEFAULT_PASSWORD,
    }
}

const fn category(name: &'static str, description: &'static str) -> CategorySeed {
    CategorySeed { name, description }
}
