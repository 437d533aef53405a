//! User-facing messages.
//!
//! Every error that reaches a client carries one of these strings. They are
//! shown inline by the web forms, so they stay in Spanish.

// Input validation
pub const MISSING_PRINCIPAL: &str = "Falta el identificador del usuario";
pub const INVALID_PRINCIPAL: &str = "Identificador de usuario inválido";
pub const CONTACT_FIELDS_REQUIRED: &str = "Nombre, correo y teléfono son obligatorios";
pub const INVALID_EMAIL: &str = "Correo inválido";
pub const ROLE_REQUIRED: &str = "Selecciona una opción";
pub const MISSING_SESSION_USER: &str = "No se detectó un usuario autenticado.";
pub const MALFORMED_REQUEST: &str = "La solicitud no tiene un formato válido";

// Business settings form
pub const BUSINESS_NAME_REQUIRED: &str = "Este campo es obligatorio";
pub const BUSINESS_DESCRIPTION_REQUIRED: &str = "Describe brevemente tu negocio";
pub const BUSINESS_DESCRIPTION_TOO_SHORT: &str = "Debe tener al menos 10 caracteres";
pub const INVALID_LOGO_URL: &str = "Debe ser una URL válida";

// Staff form
pub const STAFF_NAME_REQUIRED: &str = "El nombre es obligatorio";
pub const STAFF_EMAIL_REQUIRED: &str = "El correo es obligatorio";
pub const STAFF_EMAIL_INVALID: &str = "Ingresa un correo válido";
pub const STAFF_ROLE_REQUIRED: &str = "Indica un rol";
pub const STAFF_PHONE_REQUIRED: &str = "Incluye un teléfono de contacto";
pub const STAFF_PHONE_TOO_SHORT: &str = "Debe tener al menos 8 dígitos";
pub const STAFF_BUSINESS_REQUIRED: &str = "Falta el identificador del negocio";

// Store failures (fallbacks when the store gives no message)
pub const USER_LOOKUP_FAILED: &str = "No pudimos consultar el usuario";
pub const USER_SAVE_FAILED: &str = "No pudimos guardar el usuario";
pub const OWNER_SAVE_FAILED: &str = "No pudimos registrar al dueño";
pub const CLIENT_SAVE_FAILED: &str = "No pudimos registrar el cliente";
pub const BUSINESS_LOOKUP_FAILED: &str = "No pudimos consultar el negocio";
pub const BUSINESS_UPDATE_FAILED: &str = "No pudimos actualizar el negocio";
pub const BUSINESS_SAVE_FAILED: &str = "No pudimos registrar el negocio";
pub const PROFILE_FETCH_FAILED: &str = "No pudimos obtener el perfil";
pub const PROFILE_UPDATE_FAILED: &str = "No pudimos actualizar tu perfil";
pub const SETTINGS_USER_FAILED: &str = "No pudimos obtener la información del usuario.";
pub const SETTINGS_BUSINESS_FAILED: &str = "No pudimos obtener los datos del negocio.";
pub const STAFF_FETCH_FAILED: &str = "No pudimos obtener el equipo";
pub const STAFF_SAVE_FAILED: &str = "No pudimos registrar al empleado";
pub const STORE_FAILED: &str = "No pudimos completar la operación";

// Unexpected failures
pub const ONBOARDING_FAILED: &str = "No pudimos procesar el onboarding";
pub const REQUEST_FAILED: &str = "No pudimos procesar la solicitud";
