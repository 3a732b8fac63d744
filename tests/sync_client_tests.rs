//! Pruebas del cliente de sincronización contra un servidor HTTP real
//! levantado en un puerto efímero.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use flota_api::clients::sync_client::{aplicar_patch, PatchLocal, SyncClient, SyncError, Vigencia};
use flota_api::config::session::{SessionConfig, TOKEN_FICTICIO};

async fn servidor_de_prueba() -> String {
    let app = Router::new()
        .route("/api/plano", get(|| async { Json(json!([{ "id": "1" }, { "id": "2" }])) }))
        .route(
            "/api/envuelto",
            get(|| async { Json(json!({ "success": true, "data": [{ "id": "1" }] })) }),
        )
        .route(
            "/api/anidado",
            get(|| async {
                Json(json!({ "data": { "items": [{ "id": "1" }, { "id": "2" }, { "id": "3" }] } }))
            }),
        )
        .route("/api/invalido", get(|| async { Json(json!({ "mensaje": "hola" })) }))
        .route(
            "/api/lento",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Json(json!([{ "id": "lento" }]))
            }),
        )
        .route("/api/eco", get(eco_auth))
        .route("/api/camiones", post(crear_camion))
        .route("/api/camiones/:id", put(actualizar_camion))
        .route(
            "/api/camiones/:id",
            delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/sin-data/:id",
            put(|| async { Json(json!({ "success": true, "message": "ok" })) }),
        )
        .route(
            "/api/sin-data",
            post(|| async { Json(json!({ "success": true, "message": "ok" })) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Devuelve el header `Authorization` recibido, o null
async fn eco_auth(headers: HeaderMap) -> Json<Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    Json(json!({ "data": [{ "auth": auth }] }))
}

async fn crear_camion(Json(cuerpo): Json<Value>) -> Json<Value> {
    let mut creado = cuerpo;
    if let Some(objeto) = creado.as_object_mut() {
        objeto.insert("id".to_string(), json!("nuevo-1"));
    }
    Json(json!({ "success": true, "data": creado }))
}

async fn actualizar_camion(Path(id): Path<String>, Json(cuerpo): Json<Value>) -> Json<Value> {
    let mut datos = cuerpo;
    if let Some(objeto) = datos.as_object_mut() {
        objeto.insert("id".to_string(), json!(id));
    }
    Json(json!({ "data": datos }))
}

fn esperar_vigente(resultado: Vigencia<Vec<Value>>) -> Vec<Value> {
    match resultado {
        Vigencia::Vigente(registros) => registros,
        Vigencia::Reemplazada => panic!("el listado fue reemplazado"),
    }
}

#[tokio::test]
async fn listar_normaliza_los_tres_sobres() {
    let base = servidor_de_prueba().await;
    let cliente = SyncClient::new(base, SessionConfig::en_memoria());

    let plano = esperar_vigente(cliente.listar("plano").await.unwrap());
    assert_eq!(plano.len(), 2);

    let envuelto = esperar_vigente(cliente.listar("envuelto").await.unwrap());
    assert_eq!(envuelto.len(), 1);

    let anidado = esperar_vigente(cliente.listar("anidado").await.unwrap());
    assert_eq!(anidado.len(), 3);
}

#[tokio::test]
async fn sobre_no_reconocido_es_respuesta_invalida() {
    let base = servidor_de_prueba().await;
    let cliente = SyncClient::new(base, SessionConfig::en_memoria());

    let error = cliente.listar("invalido").await.unwrap_err();
    assert!(matches!(error, SyncError::RespuestaInvalida(_)));
}

#[tokio::test]
async fn crear_y_actualizar_emiten_patches() {
    let base = servidor_de_prueba().await;
    let cliente = SyncClient::new(base, SessionConfig::en_memoria());
    let mut lista = vec![json!({ "id": "viejo", "nombre": "Camión Viejo" })];

    let patch = cliente
        .crear("camiones", &json!({ "nombre": "Camión Nuevo" }))
        .await
        .unwrap();
    aplicar_patch(&mut lista, &patch);
    assert_eq!(lista.len(), 2);
    assert_eq!(lista[1]["id"], "nuevo-1");

    let patch = cliente
        .actualizar("camiones", "viejo", &json!({ "nombre": "Renombrado" }))
        .await
        .unwrap();
    assert!(matches!(patch, PatchLocal::FusionarPorId { .. }));
    aplicar_patch(&mut lista, &patch);
    assert_eq!(lista[0]["nombre"], "Renombrado");
}

#[tokio::test]
async fn eliminar_fallido_no_produce_patch() {
    let base = servidor_de_prueba().await;
    let cliente = SyncClient::new(base, SessionConfig::en_memoria());
    let lista = vec![json!({ "id": "1" })];

    let error = cliente.eliminar("camiones", "1").await.unwrap_err();
    match error {
        SyncError::Http { status, .. } => assert_eq!(status, 500),
        otro => panic!("esperaba Http, llegó {:?}", otro),
    }
    assert_eq!(error.mensaje_usuario(), "Error del servidor, intenta de nuevo");

    // La lista local queda intacta: sin parche no hay mutación
    assert_eq!(lista.len(), 1);
}

#[tokio::test]
async fn sin_token_no_se_manda_authorization() {
    let base = servidor_de_prueba().await;
    let cliente = SyncClient::new(base, SessionConfig::en_memoria());

    let registros = esperar_vigente(cliente.listar("eco").await.unwrap());
    assert_eq!(registros[0]["auth"], Value::Null);
}

#[tokio::test]
async fn el_token_ficticio_tampoco_se_manda() {
    let base = servidor_de_prueba().await;
    let sesion = SessionConfig::en_memoria();
    sesion.guardar_token(TOKEN_FICTICIO);
    let cliente = SyncClient::new(base, sesion);

    let registros = esperar_vigente(cliente.listar("eco").await.unwrap());
    assert_eq!(registros[0]["auth"], Value::Null);
}

#[tokio::test]
async fn el_token_real_viaja_como_bearer() {
    let base = servidor_de_prueba().await;
    let sesion = SessionConfig::en_memoria();
    sesion.guardar_token("jwt-real");
    let cliente = SyncClient::new(base, sesion);

    let registros = esperar_vigente(cliente.listar("eco").await.unwrap());
    assert_eq!(registros[0]["auth"], "Bearer jwt-real");
}

#[tokio::test]
async fn listado_superpuesto_del_mismo_recurso_queda_reemplazado() {
    let base = servidor_de_prueba().await;
    let cliente = Arc::new(SyncClient::new(base, SessionConfig::en_memoria()));

    let primero = {
        let cliente = cliente.clone();
        tokio::spawn(async move { cliente.listar("lento").await })
    };
    // El segundo listado del mismo recurso arranca mientras el primero
    // sigue esperando; el primero debe descartarse al resolverse
    tokio::time::sleep(Duration::from_millis(50)).await;
    let segundo = cliente.listar("lento").await.unwrap();
    assert!(matches!(segundo, Vigencia::Vigente(_)));

    let resultado = primero.await.unwrap().unwrap();
    assert!(matches!(resultado, Vigencia::Reemplazada));
}

#[tokio::test]
async fn recursos_distintos_no_compiten() {
    let base = servidor_de_prueba().await;
    let cliente = Arc::new(SyncClient::new(base, SessionConfig::en_memoria()));

    let lento = {
        let cliente = cliente.clone();
        tokio::spawn(async move { cliente.listar("lento").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let otro = cliente.listar("plano").await.unwrap();
    assert!(matches!(otro, Vigencia::Vigente(_)));

    // El listado de otro recurso no invalida al que seguía en vuelo
    let resultado = lento.await.unwrap().unwrap();
    assert!(matches!(resultado, Vigencia::Vigente(_)));
}

#[tokio::test]
async fn actualizar_sin_data_usa_el_cuerpo_enviado() {
    let base = servidor_de_prueba().await;
    let cliente = SyncClient::new(base, SessionConfig::en_memoria());
    let mut lista = vec![json!({ "id": "7", "nombre": "Viejo" })];

    let patch = cliente
        .actualizar("sin-data", "7", &json!({ "nombre": "Nuevo" }))
        .await
        .unwrap();
    aplicar_patch(&mut lista, &patch);

    // El ack del servidor no se fusiona; se usa lo que se envió
    assert_eq!(lista[0]["nombre"], "Nuevo");
    assert_eq!(lista[0].get("success"), None);
    assert_eq!(lista[0].get("message"), None);
}

#[tokio::test]
async fn crear_sin_data_es_respuesta_invalida() {
    let base = servidor_de_prueba().await;
    let cliente = SyncClient::new(base, SessionConfig::en_memoria());

    let error = cliente
        .crear("sin-data", &json!({ "nombre": "Nuevo" }))
        .await
        .unwrap_err();
    assert!(matches!(error, SyncError::RespuestaInvalida(_)));
}

#[tokio::test]
async fn sin_servidor_es_error_de_red() {
    // Puerto reservado y cerrado de inmediato
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cliente = SyncClient::new(format!("http://{}", addr), SessionConfig::en_memoria());
    let error = cliente.listar("camiones").await.unwrap_err();
    assert!(matches!(error, SyncError::Red(_)));
    assert_eq!(
        error.mensaje_usuario(),
        "Sin conexión con el servidor, revisa tu red"
    );
}
