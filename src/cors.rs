use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsConfig;

/// 配置列表解析结果：是否包含 "*"，以及其余合法条目。
struct ParsedList<T> {
    any: bool,
    items: Vec<T>,
}

fn parse_list<T>(
    field: &str,
    values: &[String],
    parse: impl Fn(&str) -> Option<T>,
) -> ParsedList<T> {
    let mut parsed = ParsedList {
        any: false,
        items: Vec::new(),
    };
    for value in values.iter().map(|v| v.trim()).filter(|v| !v.is_empty()) {
        if value == "*" {
            parsed.any = true;
            continue;
        }
        match parse(value) {
            Some(item) => parsed.items.push(item),
            None => tracing::warn!("CORS {} 含无效值: {}", field, value),
        }
    }
    parsed
}

/// 根据配置构建 CORS 中间件；未启用或配置无效时返回 `None`。
pub fn build_cors_layer(cors: &CorsConfig) -> Option<CorsLayer> {
    if !cors.enabled {
        return None;
    }

    let origins = parse_list("allowed_origins", &cors.allowed_origins, |v| {
        HeaderValue::from_str(v).ok()
    });
    if !origins.any && origins.items.is_empty() {
        tracing::warn!("CORS 已启用但 allowed_origins 为空，已跳过启用");
        return None;
    }

    let methods = parse_list("allowed_methods", &cors.allowed_methods, |v| {
        Method::from_bytes(v.to_ascii_uppercase().as_bytes()).ok()
    });
    let headers = parse_list("allowed_headers", &cors.allowed_headers, |v| {
        HeaderName::from_bytes(v.as_bytes()).ok()
    });
    let expose = parse_list("expose_headers", &cors.expose_headers, |v| {
        HeaderName::from_bytes(v.as_bytes()).ok()
    });

    let has_wildcard = origins.any || methods.any || headers.any || expose.any;
    if cors.allow_credentials && has_wildcard {
        tracing::error!("CORS 配置无效：allow_credentials=true 不能与 \"*\" 同时使用，已跳过启用");
        return None;
    }

    let mut layer = CorsLayer::new();

    layer = if origins.any {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins.items)
    };

    if methods.any {
        layer = layer.allow_methods(Any);
    } else if !methods.items.is_empty() {
        layer = layer.allow_methods(methods.items);
    }

    if headers.any {
        layer = layer.allow_headers(Any);
    } else if !headers.items.is_empty() {
        layer = layer.allow_headers(headers.items);
    }

    if expose.any {
        layer = layer.expose_headers(Any);
    } else if !expose.items.is_empty() {
        layer = layer.expose_headers(expose.items);
    }

    if cors.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if let Some(secs) = cors.max_age_secs
        && secs > 0
    {
        layer = layer.max_age(Duration::from_secs(secs));
    }

    Some(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_builds_nothing() {
        assert!(build_cors_layer(&CorsConfig::disabled()).is_none());
    }

    #[test]
    fn credentials_with_wildcard_is_rejected() {
        let cors = CorsConfig {
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert!(build_cors_layer(&cors).is_none());
    }

    #[test]
    fn empty_origins_are_rejected() {
        let cors = CorsConfig {
            enabled: true,
            allowed_origins: vec!["  ".to_string()],
            ..CorsConfig::disabled()
        };
        assert!(build_cors_layer(&cors).is_none());
    }

    #[test]
    fn parse_list_skips_invalid_entries() {
        let values = vec!["GET".to_string(), "bad method".to_string(), "*".to_string()];
        let parsed = parse_list("allowed_methods", &values, |v| {
            Method::from_bytes(v.as_bytes()).ok()
        });
        assert!(parsed.any);
        assert_eq!(parsed.items, vec![Method::GET]);
    }
}
