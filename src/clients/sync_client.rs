//! Cliente de sincronización remota
//!
//! Cuatro operaciones contra la API REST: listar, crear, actualizar y
//! eliminar. Cada llamada es un único intento: un fallo se reporta al
//! que llamó y el reintento es manual. Una llamada fallida nunca se
//! reporta como éxito y nunca produce un parche de estado local.
//!
//! El backend histórico responde con varios formatos de sobre; aquí se
//! normalizan una sola vez, en este cliente, y el resto del código ve
//! siempre un arreglo plano.

use std::collections::HashMap;
use std::sync::Mutex;

use lazy_static::lazy_static;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::config::session::SessionConfig;

lazy_static! {
    /// Mensajes para el usuario por código HTTP
    static ref MENSAJES_HTTP: HashMap<u16, &'static str> = {
        let mut m = HashMap::new();
        m.insert(400, "Los datos enviados no son válidos");
        m.insert(401, "Tu sesión expiró, inicia sesión de nuevo");
        m.insert(403, "No tienes permiso para esta operación");
        m.insert(404, "El registro ya no existe");
        m.insert(409, "Ya existe un registro con esos datos");
        m.insert(500, "Error del servidor, intenta de nuevo");
        m
    };
}

/// Error de sincronización, siempre convertible a un mensaje mostrable
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Error de red: {0}")]
    Red(String),

    #[error("HTTP {status}: {mensaje}")]
    Http { status: u16, mensaje: String },

    #[error("Respuesta inválida: {0}")]
    RespuestaInvalida(String),

    #[error("Validación: {0}")]
    Validacion(String),
}

impl SyncError {
    fn de_status(status: StatusCode) -> Self {
        let codigo = status.as_u16();
        let mensaje = MENSAJES_HTTP
            .get(&codigo)
            .copied()
            .unwrap_or("La operación no se pudo completar")
            .to_string();
        SyncError::Http { status: codigo, mensaje }
    }

    /// Mensaje listo para mostrar en pantalla
    pub fn mensaje_usuario(&self) -> String {
        match self {
            SyncError::Red(_) => "Sin conexión con el servidor, revisa tu red".to_string(),
            SyncError::Http { mensaje, .. } => mensaje.clone(),
            SyncError::RespuestaInvalida(_) => {
                "El servidor respondió algo inesperado".to_string()
            }
            SyncError::Validacion(mensaje) => mensaje.clone(),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => SyncError::de_status(status),
            None => SyncError::Red(error.to_string()),
        }
    }
}

/// Instrucción de parche sobre la lista local
///
/// Solo se emite tras una confirmación del servidor; mientras tanto la
/// lista local queda intacta.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchLocal {
    Agregar(Value),
    FusionarPorId { id: String, datos: Value },
    QuitarPorId { id: String },
}

/// Aplicar un parche a la lista local de registros crudos
pub fn aplicar_patch(lista: &mut Vec<Value>, patch: &PatchLocal) {
    match patch {
        PatchLocal::Agregar(registro) => lista.push(registro.clone()),
        PatchLocal::FusionarPorId { id, datos } => {
            for registro in lista.iter_mut() {
                if id_de(registro).as_deref() == Some(id) {
                    fusionar(registro, datos);
                    break;
                }
            }
        }
        PatchLocal::QuitarPorId { id } => {
            lista.retain(|registro| id_de(registro).as_deref() != Some(id.as_str()));
        }
    }
}

fn id_de(registro: &Value) -> Option<String> {
    for clave in ["id", "_id", "uuid"] {
        match registro.get(clave) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => continue,
        }
    }
    None
}

/// Fusión superficial campo a campo
fn fusionar(destino: &mut Value, datos: &Value) {
    if let (Some(destino), Some(datos)) = (destino.as_object_mut(), datos.as_object()) {
        for (clave, valor) in datos {
            destino.insert(clave.clone(), valor.clone());
        }
    }
}

/// Resultado de un listado frente a solicitudes superpuestas
///
/// Un listado de un recurso lanzado antes que otro del mismo recurso
/// puede resolverse después; solo el de la última generación se aplica,
/// el resto se descarta. Recursos distintos no compiten entre sí.
#[derive(Debug)]
pub enum Vigencia<T> {
    Vigente(T),
    Reemplazada,
}

/// Cliente de sincronización con la API REST
pub struct SyncClient {
    http: Client,
    base_url: String,
    session: SessionConfig,
    /// Generación de listado por recurso
    generaciones: Mutex<HashMap<String, u64>>,
}

impl SyncClient {
    pub fn new(base_url: impl Into<String>, session: SessionConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
            generaciones: Mutex::new(HashMap::new()),
        }
    }

    pub fn session(&self) -> &SessionConfig {
        &self.session
    }

    fn url(&self, recurso: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/api/{}/{}", self.base_url, recurso, id),
            None => format!("{}/api/{}", self.base_url, recurso),
        }
    }

    /// Agregar `Authorization` solo si hay auth real en la sesión
    fn con_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(bearer) => request.header(AUTHORIZATION, bearer),
            None => request,
        }
    }

    /// Iniciar un listado: incrementa y devuelve la generación del recurso
    fn iniciar_listado(&self, recurso: &str) -> u64 {
        let mut generaciones = self.generaciones.lock().unwrap_or_else(|e| e.into_inner());
        let generacion = generaciones.entry(recurso.to_string()).or_insert(0);
        *generacion += 1;
        *generacion
    }

    fn generacion_actual(&self, recurso: &str) -> u64 {
        let generaciones = self.generaciones.lock().unwrap_or_else(|e| e.into_inner());
        generaciones.get(recurso).copied().unwrap_or(0)
    }

    /// Listar registros de un recurso
    ///
    /// Devuelve `Reemplazada` si otra solicitud de listado del mismo
    /// recurso arrancó mientras esta esperaba la respuesta.
    pub async fn listar(&self, recurso: &str) -> Result<Vigencia<Vec<Value>>, SyncError> {
        let generacion = self.iniciar_listado(recurso);

        let respuesta = self
            .con_auth(self.http.get(self.url(recurso, None)))
            .send()
            .await?;

        if !respuesta.status().is_success() {
            return Err(SyncError::de_status(respuesta.status()));
        }

        let cuerpo: Value = respuesta
            .json()
            .await
            .map_err(|e| SyncError::RespuestaInvalida(e.to_string()))?;
        let registros = normalizar_envelope(cuerpo)?;

        if self.generacion_actual(recurso) != generacion {
            log::debug!("🔄 Listado de '{}' reemplazado por uno más nuevo", recurso);
            return Ok(Vigencia::Reemplazada);
        }

        Ok(Vigencia::Vigente(registros))
    }

    /// Crear un registro; en éxito devuelve el parche de agregado
    pub async fn crear(&self, recurso: &str, cuerpo: &Value) -> Result<PatchLocal, SyncError> {
        let respuesta = self
            .con_auth(self.http.post(self.url(recurso, None)))
            .json(cuerpo)
            .send()
            .await?;

        if !respuesta.status().is_success() {
            return Err(SyncError::de_status(respuesta.status()));
        }

        let creado = extraer_objeto(respuesta.json().await.map_err(|e| {
            SyncError::RespuestaInvalida(e.to_string())
        })?)?;
        Ok(PatchLocal::Agregar(creado))
    }

    /// Actualizar un registro; en éxito devuelve el parche de fusión
    pub async fn actualizar(
        &self,
        recurso: &str,
        id: &str,
        cuerpo: &Value,
    ) -> Result<PatchLocal, SyncError> {
        let respuesta = self
            .con_auth(self.http.put(self.url(recurso, Some(id))))
            .json(cuerpo)
            .send()
            .await?;

        if !respuesta.status().is_success() {
            return Err(SyncError::de_status(respuesta.status()));
        }

        let datos = extraer_objeto(respuesta.json().await.map_err(|e| {
            SyncError::RespuestaInvalida(e.to_string())
        })?)
        .unwrap_or_else(|_| cuerpo.clone());

        Ok(PatchLocal::FusionarPorId {
            id: id.to_string(),
            datos,
        })
    }

    /// Eliminar un registro; en éxito devuelve el parche de remoción
    pub async fn eliminar(&self, recurso: &str, id: &str) -> Result<PatchLocal, SyncError> {
        let respuesta = self
            .con_auth(self.http.delete(self.url(recurso, Some(id))))
            .send()
            .await?;

        if !respuesta.status().is_success() {
            return Err(SyncError::de_status(respuesta.status()));
        }

        Ok(PatchLocal::QuitarPorId { id: id.to_string() })
    }
}

/// Normalizar los formatos de sobre que usa el backend
///
/// Se aceptan: arreglo plano, `{data: [...]}` y `{data: {items: [...]}}`
/// (con `success` opcional alrededor). Cualquier otra forma es un error
/// de respuesta inválida.
pub fn normalizar_envelope(cuerpo: Value) -> Result<Vec<Value>, SyncError> {
    if let Value::Array(items) = cuerpo {
        return Ok(items);
    }

    if let Some(data) = cuerpo.get("data") {
        if let Value::Array(items) = data {
            return Ok(items.clone());
        }
        if let Some(Value::Array(items)) = data.get("items") {
            return Ok(items.clone());
        }
    }

    Err(SyncError::RespuestaInvalida(format!(
        "sobre de listado no reconocido: {}",
        tipo_de(&cuerpo)
    )))
}

/// Extraer el objeto de una respuesta de creación/actualización
///
/// Un sobre sin objeto en `data` (por ejemplo `{"success": true,
/// "message": "ok"}`) no es un registro: devolverlo tal cual fusionaría
/// `success`/`message` en la lista local.
fn extraer_objeto(cuerpo: Value) -> Result<Value, SyncError> {
    if let Some(data) = cuerpo.get("data") {
        if data.is_object() {
            return Ok(data.clone());
        }
        return Err(SyncError::RespuestaInvalida(format!(
            "el campo data no es un objeto, es {}",
            tipo_de(data)
        )));
    }

    match &cuerpo {
        Value::Object(objeto) if !objeto.contains_key("success") => Ok(cuerpo),
        _ => Err(SyncError::RespuestaInvalida(format!(
            "se esperaba un registro, llegó un {} sin data",
            tipo_de(&cuerpo)
        ))),
    }
}

fn tipo_de(valor: &Value) -> &'static str {
    match valor {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_arreglo_plano() {
        let registros = normalizar_envelope(json!([{ "id": "1" }, { "id": "2" }])).unwrap();
        assert_eq!(registros.len(), 2);
    }

    #[test]
    fn test_envelope_data() {
        let registros = normalizar_envelope(json!({ "data": [{ "id": "1" }] })).unwrap();
        assert_eq!(registros.len(), 1);
    }

    #[test]
    fn test_envelope_data_items() {
        let cuerpo = json!({ "success": true, "data": { "items": [{ "id": "1" }, { "id": "2" }, { "id": "3" }] } });
        let registros = normalizar_envelope(cuerpo).unwrap();
        assert_eq!(registros.len(), 3);
    }

    #[test]
    fn test_envelope_no_reconocido() {
        assert!(normalizar_envelope(json!({ "mensaje": "hola" })).is_err());
        assert!(normalizar_envelope(json!("texto")).is_err());
        assert!(normalizar_envelope(json!(null)).is_err());
    }

    #[test]
    fn test_extraer_objeto_con_y_sin_sobre() {
        let directo = extraer_objeto(json!({ "id": "1", "nombre": "Camión" })).unwrap();
        assert_eq!(directo["id"], "1");

        let envuelto = extraer_objeto(json!({ "success": true, "data": { "id": "2" } })).unwrap();
        assert_eq!(envuelto["id"], "2");
    }

    #[test]
    fn test_sobre_sin_data_no_es_un_registro() {
        // Un ack del servidor no debe fusionarse en la lista local
        assert!(extraer_objeto(json!({ "success": true, "message": "ok" })).is_err());
        assert!(extraer_objeto(json!({ "data": "texto" })).is_err());
        assert!(extraer_objeto(json!({ "data": [1, 2] })).is_err());
        assert!(extraer_objeto(json!([1, 2])).is_err());
    }

    #[test]
    fn test_mensajes_por_status() {
        let error = SyncError::de_status(StatusCode::CONFLICT);
        assert_eq!(error.mensaje_usuario(), "Ya existe un registro con esos datos");

        let desconocido = SyncError::de_status(StatusCode::IM_A_TEAPOT);
        assert_eq!(desconocido.mensaje_usuario(), "La operación no se pudo completar");
    }

    #[test]
    fn test_aplicar_patch_agregar() {
        let mut lista = vec![json!({ "id": "1" })];
        aplicar_patch(&mut lista, &PatchLocal::Agregar(json!({ "id": "2" })));
        assert_eq!(lista.len(), 2);
    }

    #[test]
    fn test_aplicar_patch_fusionar() {
        let mut lista = vec![json!({ "id": "1", "nombre": "Viejo", "placa": "AAA-111" })];
        aplicar_patch(
            &mut lista,
            &PatchLocal::FusionarPorId {
                id: "1".to_string(),
                datos: json!({ "nombre": "Nuevo" }),
            },
        );
        assert_eq!(lista[0]["nombre"], "Nuevo");
        // La fusión es superficial: lo no mencionado se conserva
        assert_eq!(lista[0]["placa"], "AAA-111");
    }

    #[test]
    fn test_aplicar_patch_quitar() {
        let mut lista = vec![json!({ "id": "1" }), json!({ "_id": "2" })];
        aplicar_patch(&mut lista, &PatchLocal::QuitarPorId { id: "2".to_string() });
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0]["id"], "1");
    }

    #[test]
    fn test_patch_sin_coincidencia_no_toca_nada() {
        let mut lista = vec![json!({ "id": "1" })];
        aplicar_patch(&mut lista, &PatchLocal::QuitarPorId { id: "99".to_string() });
        assert_eq!(lista.len(), 1);
    }
}
