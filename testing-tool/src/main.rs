use colored::*;
use serde_json::json;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🏍️ Moto Back-office Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    // Paso 1: URL base del servidor
    let base_url = get_base_url()?;

    // Paso 2: Menú principal
    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 💳 Consultar crédito");
        println!("2. 📊 Consultar desglose de costos");
        println!("3. 🧾 Crear solicitud de facturación de prueba");
        println!("4. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-4): ".bright_yellow());
        io::stdout().flush()?;

        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        let choice = choice.trim();

        match choice {
            "1" => {
                if let Err(e) = test_get_credito(&base_url).await {
                    println!("{} {}", "❌ Error:".bright_red(), e);
                }
            }
            "2" => {
                if let Err(e) = test_get_desglose(&base_url).await {
                    println!("{} {}", "❌ Error:".bright_red(), e);
                }
            }
            "3" => {
                if let Err(e) = test_crear_solicitud(&base_url).await {
                    println!("{} {}", "❌ Error:".bright_red(), e);
                }
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

fn get_base_url() -> Result<String, Box<dyn std::error::Error>> {
    print!(
        "{}",
        "URL del servidor [http://localhost:3000]: ".bright_yellow()
    );
    io::stdout().flush()?;
    let mut url = String::new();
    io::stdin().read_line(&mut url)?;
    let url = url.trim();
    if url.is_empty() {
        Ok("http://localhost:3000".to_string())
    } else {
        Ok(url.trim_end_matches('/').to_string())
    }
}

fn read_codigo() -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", "Código de crédito (CR-XXXXX): ".bright_yellow());
    io::stdout().flush()?;
    let mut codigo = String::new();
    io::stdin().read_line(&mut codigo)?;
    Ok(codigo.trim().to_string())
}

async fn test_get_credito(base_url: &str) -> anyhow::Result<()> {
    let codigo = read_codigo().map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "🔍 Consultando crédito...".bright_cyan());
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/api/creditos/{}", base_url, codigo))
        .send()
        .await?;

    let status = response.status();
    let body: serde_json::Value = response.json().await?;

    println!("{} {}", "📡 Status:".bright_cyan(), status);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}

async fn test_get_desglose(base_url: &str) -> anyhow::Result<()> {
    let codigo = read_codigo().map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "🔍 Consultando desglose...".bright_cyan());
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/api/creditos/{}/desglose", base_url, codigo))
        .send()
        .await?;

    let status = response.status();
    let body: serde_json::Value = response.json().await?;

    println!("{} {}", "📡 Status:".bright_cyan(), status);

    if status.is_success() {
        if let Some(display) = body.get("display") {
            println!();
            println!("{}", "📊 DESGLOSE".bright_green().bold());
            println!("{}", "============".bright_green());
            print_linea("Moto (neto)", display.get("vehiculo_neto"));
            print_linea("Moto (IVA)", display.get("vehiculo_iva"));
            print_linea("Moto (bruto)", display.get("vehiculo_bruto"));
            print_linea("SOAT", display.get("soat"));
            print_linea("Matrícula", display.get("matricula"));
            print_linea("Impuestos", display.get("impuestos"));
            print_linea("Documentos", display.get("subtotal_documentos"));
            print_linea("Accesorios", display.get("accesorios_bruto"));
            print_linea("Seguros", display.get("seguros"));
            print_linea("Descuentos", display.get("descuentos"));
            print_linea("GRAN TOTAL", display.get("gran_total"));
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&body)?);
    }
    Ok(())
}

fn print_linea(etiqueta: &str, valor: Option<&serde_json::Value>) {
    let texto = valor.and_then(|v| v.as_str()).unwrap_or("—");
    println!("  {:<14} {}", etiqueta.bright_white(), texto.bright_cyan());
}

async fn test_crear_solicitud(base_url: &str) -> anyhow::Result<()> {
    let codigo = read_codigo().map_err(|e| anyhow::anyhow!("{}", e))?;

    let payload = json!({
        "codigo_credito": codigo,
        "soat": 150000,
        "matricula": 80000,
        "impuestos": 70000,
        "valor_moto_bruto": 4700000,
        "observaciones": "Solicitud de prueba generada por testing-tool"
    });

    println!("{}", "📤 Enviando solicitud de prueba...".bright_cyan());
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/api/solicitudes-facturacion", base_url))
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    let body: serde_json::Value = response.json().await?;

    println!("{} {}", "📡 Status:".bright_cyan(), status);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
