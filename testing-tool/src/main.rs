use colored::*;
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🚚 Flota API Testing Tool".bright_blue().bold());
    println!("{}", "=========================".bright_blue());
    println!();

    let base_url = leer_linea("URL del servidor (ej: http://localhost:3000): ")?;
    let base_url = if base_url.is_empty() {
        "http://localhost:3000".to_string()
    } else {
        base_url.trim_end_matches('/').to_string()
    };

    // Paso 1: Autenticarse y obtener token
    let token = autenticar(&base_url).await?;

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🚛 Listar camiones (con búsqueda y filtro)");
        println!("2. 🧑 Listar motoristas");
        println!("3. 📊 Resumen del dashboard");
        println!("4. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-4): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        let choice = choice.trim();

        match choice {
            "1" => {
                listar_con_filtro(&base_url, &token, "camiones").await?;
            }
            "2" => {
                listar_con_filtro(&base_url, &token, "motoristas").await?;
            }
            "3" => {
                mostrar_resumen(&base_url, &token).await?;
            }
            "4" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn leer_linea(prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", prompt.bright_yellow());
    io::stdout().flush()?;
    let mut linea = String::new();
    io::stdin().read_line(&mut linea)?;
    Ok(linea.trim().to_string())
}

async fn autenticar(base_url: &str) -> Result<String, Box<dyn std::error::Error>> {
    println!();
    println!("{}", "🔐 INICIAR SESIÓN".bright_cyan().bold());
    println!("{}", "==================".bright_cyan());

    let email = leer_linea("Email: ")?;
    let password = leer_linea("Password: ")?;

    let payload = json!({ "email": email, "password": password });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/auth/login", base_url))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        println!("{} {}", "❌ Login falló:".bright_red(), status);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Err("login fallido".into());
    }

    let token = body["data"]["token"]
        .as_str()
        .ok_or("respuesta de login sin token")?
        .to_string();

    println!("{}", "✅ Sesión iniciada".bright_green());
    Ok(token)
}

async fn listar_con_filtro(
    base_url: &str,
    token: &str,
    recurso: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    let buscar = leer_linea("Buscar (vacío = sin búsqueda): ")?;
    let estado = leer_linea("Estado (vacío/all = todos): ")?;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/api/{}", base_url, recurso))
        .query(&[("buscar", buscar.as_str()), ("estado", estado.as_str())])
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        println!("{} {}", "❌ Error:".bright_red(), status);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    if let Some(conteos) = body["conteos"].as_object() {
        println!("{}", "📊 Conteos por estado (lista completa):".bright_blue());
        for (clave, cantidad) in conteos {
            println!("   {} = {}", clave.bright_cyan(), cantidad);
        }
    }

    let vacio = Vec::new();
    let data = body["data"].as_array().unwrap_or(&vacio);
    println!(
        "{} {}",
        "📦 Registros que pasan el filtro:".bright_blue(),
        data.len()
    );
    for registro in data {
        println!("{}", serde_json::to_string_pretty(registro)?);
    }

    Ok(())
}

async fn mostrar_resumen(base_url: &str, token: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/api/dashboard/resumen", base_url))
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    let body: Value = response.json().await?;

    if !status.is_success() {
        println!("{} {}", "❌ Error:".bright_red(), status);
    }
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
