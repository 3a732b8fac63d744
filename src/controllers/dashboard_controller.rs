use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::PgPool;

use crate::models::cotizacion::{Cotizacion, EstadoCotizacion};
use crate::models::registro::RegistroFlota;
use crate::models::viaje::{EstadoViaje, Viaje};
use crate::repositories::camion_repository::CamionRepository;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::repositories::cotizacion_repository::CotizacionRepository;
use crate::repositories::motorista_repository::MotoristaRepository;
use crate::repositories::viaje_repository::ViajeRepository;
use crate::services::filtro::{contar_por, ConteoEstados};
use crate::utils::errors::AppError;

/// Resumen de conteos por estado de cada colección
#[derive(Debug, Serialize)]
pub struct ResumenDashboard {
    pub camiones: BTreeMap<String, usize>,
    pub motoristas: BTreeMap<String, usize>,
    pub clientes: BTreeMap<String, usize>,
    pub cotizaciones: BTreeMap<String, usize>,
    pub viajes: BTreeMap<String, usize>,
}

pub struct DashboardController {
    camiones: CamionRepository,
    motoristas: MotoristaRepository,
    clientes: ClienteRepository,
    cotizaciones: CotizacionRepository,
    viajes: ViajeRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            camiones: CamionRepository::new(pool.clone()),
            motoristas: MotoristaRepository::new(pool.clone()),
            clientes: ClienteRepository::new(pool.clone()),
            cotizaciones: CotizacionRepository::new(pool.clone()),
            viajes: ViajeRepository::new(pool),
        }
    }

    pub async fn resumen(&self) -> Result<ResumenDashboard, AppError> {
        let camiones: Vec<RegistroFlota> = self
            .camiones
            .find_all()
            .await?
            .iter()
            .map(|c| c.como_registro())
            .collect();
        let motoristas: Vec<RegistroFlota> = self
            .motoristas
            .find_all()
            .await?
            .iter()
            .map(|m| m.como_registro())
            .collect();
        let clientes: Vec<RegistroFlota> = self
            .clientes
            .find_all()
            .await?
            .iter()
            .map(|c| c.como_registro())
            .collect();
        let cotizaciones = self.cotizaciones.find_all().await?;
        let viajes = self.viajes.find_all().await?;

        Ok(ResumenDashboard {
            camiones: ConteoEstados::de(&camiones).como_mapa(),
            motoristas: ConteoEstados::de(&motoristas).como_mapa(),
            clientes: ConteoEstados::de(&clientes).como_mapa(),
            cotizaciones: mapa_cotizaciones(&cotizaciones),
            viajes: mapa_viajes(&viajes),
        })
    }
}

fn mapa_cotizaciones(cotizaciones: &[Cotizacion]) -> BTreeMap<String, usize> {
    let mut por_estado = contar_por(cotizaciones, |c: &Cotizacion| c.estado_clasificado());
    for estado in EstadoCotizacion::TODOS {
        por_estado.entry(estado).or_insert(0);
    }
    let mut mapa = BTreeMap::new();
    mapa.insert("all".to_string(), cotizaciones.len());
    for (estado, cantidad) in por_estado {
        mapa.insert(estado.as_str().to_string(), cantidad);
    }
    mapa
}

fn mapa_viajes(viajes: &[Viaje]) -> BTreeMap<String, usize> {
    let mut por_estado = contar_por(viajes, |v: &Viaje| v.estado_clasificado());
    for estado in EstadoViaje::TODOS {
        por_estado.entry(estado).or_insert(0);
    }
    let mut mapa = BTreeMap::new();
    mapa.insert("all".to_string(), viajes.len());
    for (estado, cantidad) in por_estado {
        mapa.insert(estado.as_str().to_string(), cantidad);
    }
    mapa
}
