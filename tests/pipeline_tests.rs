//! Pruebas del pipeline completo de listado: registros crudos de la
//! API, normalización, clasificación, búsqueda, filtrado y conteos.

use serde_json::{json, Value};

use flota_api::models::estado::EstadoFlota;
use flota_api::models::registro::RegistroFlota;
use flota_api::services::busqueda::{coincide, normalizar_termino};
use flota_api::services::filtro::{filtrar_y_contar, FiltroActivo, FiltroEstado};
use flota_api::services::normalizador::{normalizar_registro, NOMBRE_POR_DEFECTO};

fn flota_cruda() -> Vec<Value> {
    vec![
        json!({ "id": "c1", "nombre": "Camión Rojo", "estado": "disponible", "placa": "AAA-111", "marca": "Ford", "modelo": "F-150" }),
        json!({ "_id": "c2", "name": "Camión Azul", "status": "EN RUTA", "licensePlate": "BBB-222", "marca": "Volvo", "modelo": "FH16" }),
        json!({ "uuid": "c3", "nombreCompleto": "Camión Verde", "estatus": "Mantenimiento", "matricula": "CCC-333" }),
        json!({ "id": "c4", "nombre": "Camión Gris", "estado": "no_disponible" }),
        json!({ "id": "c5", "estado": "???" }),
        json!({ "id": "c6" }),
    ]
}

fn registros() -> Vec<RegistroFlota> {
    flota_cruda().iter().map(normalizar_registro).collect()
}

#[test]
fn los_alias_resuelven_al_mismo_registro() {
    let registros = registros();

    assert_eq!(registros[0].id, "c1");
    assert_eq!(registros[1].id, "c2");
    assert_eq!(registros[2].id, "c3");

    assert_eq!(registros[0].nombre, "Camión Rojo");
    assert_eq!(registros[1].nombre, "Camión Azul");
    assert_eq!(registros[2].nombre, "Camión Verde");

    assert_eq!(registros[1].placa, "BBB-222");
    assert_eq!(registros[2].placa, "CCC-333");
}

#[test]
fn registro_sin_nombre_recibe_el_nombre_por_defecto() {
    let registros = registros();
    assert_eq!(registros[4].nombre, NOMBRE_POR_DEFECTO);
    assert_eq!(registros[5].nombre, NOMBRE_POR_DEFECTO);
}

#[test]
fn clasificacion_insensible_a_forma() {
    let registros = registros();
    assert_eq!(registros[0].estado, EstadoFlota::Disponible);
    assert_eq!(registros[1].estado, EstadoFlota::EnRuta);
    assert_eq!(registros[2].estado, EstadoFlota::Mantenimiento);
    assert_eq!(registros[3].estado, EstadoFlota::NoDisponible);
    assert_eq!(registros[4].estado, EstadoFlota::SinEstado);
    assert_eq!(registros[5].estado, EstadoFlota::SinEstado);
}

#[test]
fn la_suma_de_conteos_es_el_total() {
    let registros = registros();
    let resultado = filtrar_y_contar(&registros, &FiltroActivo::default());
    let mapa = resultado.conteos.como_mapa();

    assert_eq!(mapa["all"], registros.len());
    let suma: usize = mapa.iter().filter(|(k, _)| *k != "all").map(|(_, v)| v).sum();
    assert_eq!(suma, registros.len());
}

#[test]
fn los_conteos_no_cambian_con_la_busqueda() {
    let registros = registros();

    let sin_filtro = filtrar_y_contar(&registros, &FiltroActivo::default());
    let con_busqueda = filtrar_y_contar(
        &registros,
        &FiltroActivo {
            termino: "rojo".to_string(),
            ..Default::default()
        },
    );

    assert_eq!(con_busqueda.indices, vec![0]);
    assert_eq!(con_busqueda.conteos, sin_filtro.conteos);
}

#[test]
fn busqueda_y_filtro_son_conjuncion() {
    let registros = registros();
    let filtro = FiltroActivo {
        termino: "camión".to_string(),
        estado: FiltroEstado::Solo(EstadoFlota::EnRuta),
        ..Default::default()
    };
    let resultado = filtrar_y_contar(&registros, &filtro);
    assert_eq!(resultado.indices, vec![1]);
}

#[test]
fn el_orden_original_se_conserva() {
    let registros = registros();
    let filtro = FiltroActivo {
        estado: FiltroEstado::Solo(EstadoFlota::SinEstado),
        ..Default::default()
    };
    let resultado = filtrar_y_contar(&registros, &filtro);
    assert_eq!(resultado.indices, vec![4, 5]);
}

#[test]
fn normalizar_termino_es_idempotente() {
    let crudo = "  Camión   ROJO  ";
    let una_vez = normalizar_termino(crudo);
    let dos_veces = normalizar_termino(&una_vez);
    assert_eq!(una_vez, dos_veces);
    assert_eq!(una_vez, "camión rojo");
}

#[test]
fn busqueda_sobre_marca_y_modelo_compuestos() {
    let registros = registros();
    // "ford f-150" solo existe como composición de marca y modelo
    assert!(coincide(&registros[0], "ford f-150"));
    assert!(!coincide(&registros[1], "ford f-150"));
}

#[test]
fn termino_vacio_coincide_con_todo() {
    for registro in registros() {
        assert!(coincide(&registro, ""));
        assert!(coincide(&registro, "   "));
    }
}
