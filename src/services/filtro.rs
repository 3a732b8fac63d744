//! Filtrado y conteo por estado
//!
//! Dada la lista completa de registros, el término de búsqueda y el
//! filtro de estado, este módulo produce en una sola pasada el
//! subconjunto filtrado (búsqueda Y estado deben pasar) y los conteos
//! por estado sobre la lista completa sin filtrar, de modo que la UI
//! pueda mostrar "Mantenimiento (3)" aunque haya una búsqueda activa.

use std::collections::BTreeMap;

use crate::models::estado::{normalizar_clave, EstadoFlota};
use crate::models::registro::RegistroFlota;
use crate::services::busqueda;

/// Filtro de estado activo en la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FiltroEstado {
    #[default]
    Todos,
    Solo(EstadoFlota),
}

impl FiltroEstado {
    /// Interpretar el parámetro de filtro que manda la UI
    ///
    /// "all"/"todos" (o vacío) desactivan el filtro; cualquier otro
    /// valor se clasifica igual que un estado crudo.
    pub fn parse(crudo: &str) -> Self {
        match normalizar_clave(crudo).as_str() {
            "" | "all" | "todos" => FiltroEstado::Todos,
            otro => FiltroEstado::Solo(EstadoFlota::clasificar(Some(otro))),
        }
    }

    fn pasa(&self, estado: EstadoFlota) -> bool {
        match self {
            FiltroEstado::Todos => true,
            FiltroEstado::Solo(esperado) => estado == *esperado,
        }
    }
}

/// Modo de presentación; solo una pista para la UI, no afecta el filtrado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModoVista {
    #[default]
    Tarjetas,
    Tabla,
}

/// Estado de filtrado de una sesión de UI
#[derive(Debug, Clone, Default)]
pub struct FiltroActivo {
    pub termino: String,
    pub estado: FiltroEstado,
    pub modo_vista: ModoVista,
}

impl FiltroActivo {
    /// Volver al estado inicial (sin búsqueda, sin filtro)
    pub fn reiniciar(&mut self) {
        *self = FiltroActivo::default();
    }
}

/// Conteo genérico por clave clasificada
pub fn contar_por<T, K: Ord>(items: &[T], clave: impl Fn(&T) -> K) -> BTreeMap<K, usize> {
    let mut conteos = BTreeMap::new();
    for item in items {
        *conteos.entry(clave(item)).or_insert(0) += 1;
    }
    conteos
}

/// Conteos por estado sobre la lista completa
///
/// Invariante: la suma de todos los estados (incluido `sin_estado`)
/// es igual al total; ningún registro se duplica ni se pierde.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConteoEstados {
    pub total: usize,
    por_estado: BTreeMap<EstadoFlota, usize>,
}

impl ConteoEstados {
    pub fn de(registros: &[RegistroFlota]) -> Self {
        let mut por_estado = contar_por(registros, |r| r.estado);
        // Todos los estados presentes en el mapa, aunque estén en cero
        for estado in EstadoFlota::TODOS {
            por_estado.entry(estado).or_insert(0);
        }
        Self {
            total: registros.len(),
            por_estado,
        }
    }

    pub fn de_estado(&self, estado: EstadoFlota) -> usize {
        self.por_estado.get(&estado).copied().unwrap_or(0)
    }

    /// Mapa plano para la respuesta JSON, con la clave `all` incluida
    pub fn como_mapa(&self) -> BTreeMap<String, usize> {
        let mut mapa = BTreeMap::new();
        mapa.insert("all".to_string(), self.total);
        for (estado, cantidad) in &self.por_estado {
            mapa.insert(estado.as_str().to_string(), *cantidad);
        }
        mapa
    }
}

/// Resultado de una pasada de filtrado
#[derive(Debug, Clone)]
pub struct ResultadoFiltro {
    /// Índices de los registros que pasan, en el orden original
    pub indices: Vec<usize>,
    pub conteos: ConteoEstados,
}

impl Default for ResultadoFiltro {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            conteos: ConteoEstados::default(),
        }
    }
}

/// Filtrar y contar en una sola pasada
///
/// Determinista y sin efectos: mismas entradas, mismo resultado. El
/// orden del subconjunto filtrado sigue el orden de la lista original.
pub fn filtrar_y_contar(registros: &[RegistroFlota], filtro: &FiltroActivo) -> ResultadoFiltro {
    let conteos = ConteoEstados::de(registros);

    let indices = registros
        .iter()
        .enumerate()
        .filter(|(_, r)| filtro.estado.pasa(r.estado) && busqueda::coincide(r, &filtro.termino))
        .map(|(i, _)| i)
        .collect();

    ResultadoFiltro { indices, conteos }
}

/// Memoización del filtrado
///
/// La lista no se huella: el dueño de la lista incrementa `version`
/// cada vez que la muta y el memo recalcula solo cuando cambia la
/// versión, el término o el filtro de estado. `modo_vista` no invalida.
///
/// Es para consumidores de vida larga que mantienen la lista en
/// memoria entre interacciones (una sesión de UI). Los handlers HTTP
/// recargan la lista en cada request y llaman `filtrar_y_contar`
/// directo, sin memo.
#[derive(Debug, Default)]
pub struct FiltroMemo {
    entrada: Option<(u64, String, FiltroEstado)>,
    resultado: ResultadoFiltro,
}

impl FiltroMemo {
    pub fn calcular(
        &mut self,
        version: u64,
        registros: &[RegistroFlota],
        filtro: &FiltroActivo,
    ) -> &ResultadoFiltro {
        let entrada = (version, busqueda::normalizar_termino(&filtro.termino), filtro.estado);
        if self.entrada.as_ref() != Some(&entrada) {
            self.resultado = filtrar_y_contar(registros, filtro);
            self.entrada = Some(entrada);
        }
        &self.resultado
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::normalizador::normalizar_registro;
    use serde_json::json;

    /// 10 camiones: 3 disponibles, 2 en ruta, 1 mantenimiento,
    /// 1 no disponible y 3 sin estado reconocible
    fn diez_camiones() -> Vec<RegistroFlota> {
        let crudos = vec![
            json!({ "nombre": "Camión 1", "estado": "disponible" }),
            json!({ "nombre": "Camión 2", "estado": "Disponible" }),
            json!({ "nombre": "Camión 3", "estado": "DISPONIBLE" }),
            json!({ "nombre": "Camión 4", "estado": "en ruta" }),
            json!({ "nombre": "Camión 5", "estado": "en_ruta" }),
            json!({ "nombre": "Camión 6", "estado": "mantenimiento" }),
            json!({ "nombre": "Camión 7", "estado": "no_disponible" }),
            json!({ "nombre": "Camión 8" }),
            json!({ "nombre": "Camión 9", "estado": "???" }),
            json!({ "nombre": "Camión 10", "estado": "" }),
        ];
        crudos.iter().map(normalizar_registro).collect()
    }

    #[test]
    fn test_conteos_del_ejemplo() {
        let registros = diez_camiones();
        let mapa = ConteoEstados::de(&registros).como_mapa();

        assert_eq!(mapa["all"], 10);
        assert_eq!(mapa["disponible"], 3);
        assert_eq!(mapa["en_ruta"], 2);
        assert_eq!(mapa["mantenimiento"], 1);
        assert_eq!(mapa["no_disponible"], 1);
        assert_eq!(mapa["sin_estado"], 3);
    }

    #[test]
    fn test_suma_de_conteos_igual_al_total() {
        let registros = diez_camiones();
        let conteos = ConteoEstados::de(&registros);
        let suma: usize = EstadoFlota::TODOS.iter().map(|e| conteos.de_estado(*e)).sum();
        assert_eq!(suma, conteos.total);
        assert_eq!(suma, registros.len());
    }

    #[test]
    fn test_filtro_todos_es_neutro() {
        let registros = diez_camiones();
        let solo_busqueda = FiltroActivo {
            termino: "camión 1".to_string(),
            estado: FiltroEstado::Todos,
            ..Default::default()
        };
        let resultado = filtrar_y_contar(&registros, &solo_busqueda);
        // "camión 1" coincide con "Camión 1" y "Camión 10"
        assert_eq!(resultado.indices, vec![0, 9]);
    }

    #[test]
    fn test_busqueda_y_estado_deben_pasar_ambos() {
        let registros = diez_camiones();
        let filtro = FiltroActivo {
            termino: "camión 1".to_string(),
            estado: FiltroEstado::Solo(EstadoFlota::Disponible),
            ..Default::default()
        };
        let resultado = filtrar_y_contar(&registros, &filtro);
        assert_eq!(resultado.indices, vec![0]);
        // Los conteos siguen reflejando la lista completa
        assert_eq!(resultado.conteos.total, 10);
        assert_eq!(resultado.conteos.de_estado(EstadoFlota::Disponible), 3);
    }

    #[test]
    fn test_orden_original_se_conserva() {
        let registros = diez_camiones();
        let filtro = FiltroActivo {
            estado: FiltroEstado::Solo(EstadoFlota::SinEstado),
            ..Default::default()
        };
        let resultado = filtrar_y_contar(&registros, &filtro);
        assert_eq!(resultado.indices, vec![7, 8, 9]);
    }

    #[test]
    fn test_parse_filtro() {
        assert_eq!(FiltroEstado::parse("all"), FiltroEstado::Todos);
        assert_eq!(FiltroEstado::parse("Todos"), FiltroEstado::Todos);
        assert_eq!(FiltroEstado::parse(""), FiltroEstado::Todos);
        assert_eq!(
            FiltroEstado::parse("EN_RUTA"),
            FiltroEstado::Solo(EstadoFlota::EnRuta)
        );
    }

    #[test]
    fn test_memo_recalcula_solo_al_cambiar_entradas() {
        let registros = diez_camiones();
        let mut memo = FiltroMemo::default();
        let filtro = FiltroActivo::default();

        let primero = memo.calcular(1, &registros, &filtro).indices.clone();
        assert_eq!(primero.len(), 10);

        // Misma versión y filtro: no recalcula aunque la lista fuera otra
        let vacia: Vec<RegistroFlota> = Vec::new();
        let repetido = memo.calcular(1, &vacia, &filtro).indices.clone();
        assert_eq!(repetido, primero);

        // Nueva versión: recalcula
        let recalculado = memo.calcular(2, &vacia, &filtro);
        assert!(recalculado.indices.is_empty());
    }

    #[test]
    fn test_reiniciar_filtro() {
        let mut filtro = FiltroActivo {
            termino: "algo".to_string(),
            estado: FiltroEstado::Solo(EstadoFlota::EnRuta),
            modo_vista: ModoVista::Tabla,
        };
        filtro.reiniciar();
        assert_eq!(filtro.termino, "");
        assert_eq!(filtro.estado, FiltroEstado::Todos);
        assert_eq!(filtro.modo_vista, ModoVista::Tarjetas);
    }
}
