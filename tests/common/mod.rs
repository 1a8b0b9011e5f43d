use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;
use tiny_http::{Header, Method, Response, Server, StatusCode};

/// Fixture backend implementing the endpoints the console consumes, plus a
/// few deliberately broken ones for the error paths.
pub struct Backend {
    pub base: String,
    pub validate_hits: Arc<AtomicUsize>,
    pub options_hits: Arc<AtomicUsize>,
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Backend {
    pub fn spawn() -> Self {
        let server = Server::http("127.0.0.1:0").expect("fixture http server");
        let base = format!("http://{}", server.server_addr());
        let validate_hits = Arc::new(AtomicUsize::new(0));
        let options_hits = Arc::new(AtomicUsize::new(0));
        let v_hits = Arc::clone(&validate_hits);
        let o_hits = Arc::clone(&options_hits);
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::SeqCst) {
                let req = match server.recv_timeout(Duration::from_millis(100)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };
                respond(req, &v_hits, &o_hits);
            }
        });
        Self {
            base,
            validate_hits,
            options_hits,
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn respond(req: tiny_http::Request, validate_hits: &AtomicUsize, options_hits: &AtomicUsize) {
    let method = req.method().clone();
    let url = req.url().to_string();
    let (path, query) = match url.split_once('?') {
        Some((p, q)) => (p.to_string(), q.to_string()),
        None => (url, String::new()),
    };

    match (method, path.as_str()) {
        (Method::Get, "/regras-opcoes") => {
            options_hits.fetch_add(1, Ordering::SeqCst);
            json_response(
                req,
                200,
                json!({
                    "cidades": ["boituva", "guaratingueta", "rio de janeiro", "sao paulo"],
                    "construtoras": ["alpha", "construtora alpha"]
                }),
            );
        }
        (Method::Get, "/empreendimentos") => {
            let records = vec![
                json!({"id": 1, "construtora": "Alpha", "cidade": "Boituva", "status": "Valido", "erros": []}),
                json!({"id": 2, "construtora": "Beta", "cidade": "Sao Paulo", "status": "Invalido",
                       "erros": ["Torres devem ter menos de 30m de altura"]}),
            ];
            let wanted = query
                .split('&')
                .find_map(|kv| kv.strip_prefix("status="))
                .map(str::to_string);
            let rows: Vec<Value> = records
                .into_iter()
                .filter(|r| match &wanted {
                    Some(s) => r["status"] == s.as_str(),
                    None => true,
                })
                .collect();
            json_response(req, 200, Value::Array(rows));
        }
        (Method::Get, "/regras-aplicadas") => {
            let has_city = query.contains("cidade=");
            let has_builder = query.contains("construtora=");
            let builder_rules = if has_builder {
                json!([{"key": "alpha_lazer>=10%_sempre", "description": "Alpha always needs leisure area"}])
            } else {
                json!([])
            };
            // merged order is deliberately non-alphabetical
            let mut merged = vec![
                json!({"key": "r2_area_torres<80%_terreno", "description": "tower area under 80% of lot"}),
                json!({"key": "r1_altura<30", "description": "towers under 30m"}),
            ];
            if has_builder {
                merged.push(json!({"key": "alpha_lazer>=10%_sempre", "description": "Alpha always needs leisure area"}));
            }
            json_response(
                req,
                200,
                json!({
                    "default_city_rules": !has_city,
                    "city_rules": [
                        {"key": "r2_area_torres<80%_terreno", "description": "tower area under 80% of lot"},
                        {"key": "r1_altura<30", "description": "towers under 30m"}
                    ],
                    "builder_rules": builder_rules,
                    "merged_rules": merged
                }),
            );
        }
        (Method::Post, "/validar") => {
            validate_hits.fetch_add(1, Ordering::SeqCst);
            json_response(
                req,
                200,
                json!([
                    {"construtora": "Alpha", "cidade": "Boituva", "status": "Válido", "erros": []},
                    {"construtora": "Beta", "cidade": "Guaratinguetá", "status": "Inválido",
                     "erros": ["Torres devem ter menos de 30m de altura"]}
                ]),
            );
        }
        (Method::Post, "/validar-objeto") => json_response(req, 200, json!({"recebido": 2})),
        (Method::Post, "/pagina") => {
            let _ = req.respond(Response::from_data(b"<html>ok</html>".to_vec()));
        }
        (Method::Post, "/quebrado") => json_response(req, 400, json!({"detail": "bad data"})),
        (Method::Post, "/texto") => {
            let _ = req.respond(
                Response::from_data(b"boom".to_vec()).with_status_code(StatusCode(500)),
            );
        }
        _ => json_response(req, 404, json!({"detail": "not found"})),
    }
}

fn json_response(req: tiny_http::Request, status: u16, body: Value) {
    let response = Response::from_data(body.to_string().into_bytes())
        .with_status_code(StatusCode(status))
        .with_header(Header::from_bytes("Content-Type", "application/json").expect("header"));
    let _ = req.respond(response);
}

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub backend: Backend,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        std::fs::create_dir_all(&home).expect("create isolated home");
        Self {
            _tmp: tmp,
            home,
            backend: Backend::spawn(),
        }
    }

    pub fn cmd(&self) -> Command {
        self.cmd_with_base(&self.backend.base)
    }

    pub fn cmd_with_base(&self, base: &str) -> Command {
        let mut cmd = cargo_bin_cmd!("empre");
        cmd.env("HOME", &self.home).arg("--base-url").arg(base);
        cmd
    }

    pub fn write_dataset(&self, name: &str) -> PathBuf {
        let path = self.home.join(name);
        std::fs::write(
            &path,
            serde_json::to_string_pretty(&json!([
                {"construtora": "Alpha", "cidade": "Boituva", "numero-de-torres": 1,
                 "altura-da-torre": 20, "area-da-torre": 100, "area-do-terreno": 1000}
            ]))
            .expect("serialize dataset"),
        )
        .expect("write dataset");
        path
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
