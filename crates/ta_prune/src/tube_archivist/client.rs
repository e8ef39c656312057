use parking_lot::Once;
use reqwest::{Method, header};

// 一个对 reqwest::Client 的简单封装，用于 TubeArchivist 请求
#[derive(Clone)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new(token: &str) -> Self {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            rustls::crypto::ring::default_provider()
                .install_default()
                .expect("Failed to install rustls crypto provider");
        });
        // 每个接口都要求 token 认证，作为默认 header 添加到每个请求中
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Token {token}"))
                .expect("api token contains invalid header characters"),
        );
        Self(
            reqwest::Client::builder()
                .default_headers(headers)
                .gzip(true)
                .connect_timeout(std::time::Duration::from_secs(10))
                .read_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("failed to build reqwest client"),
        )
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.0.request(method, url)
    }
}

pub struct TaClient {
    pub client: Client,
    base_url: String,
}

impl TaClient {
    pub fn new(base_url: impl Into<String>, token: &str) -> Self {
        Self {
            client: Client::new(token),
            base_url: base_url.into(),
        }
    }

    /// 获取一个指向实例下某个路径的预构建请求
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        self.client.request(method, &format!("{}{}", self.base_url, path))
    }
}
