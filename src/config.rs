#![allow(dead_code)]

use std::time::Duration;

/// 教保文庫の照会対象店舗
///
/// 店舗名と在庫照会APIに渡す店舗IDの組。
#[derive(Debug, Clone)]
pub struct KyoboStore {
    pub store_name: String,
    pub store_id: u32,
}

/// 教保文庫REST APIの設定
#[derive(Debug, Clone)]
pub struct KyoboConfig {
    /// 在庫照会APIのURLテンプレート（`{store_id}`と`{isbn}`を置換）
    pub url: String,
    /// 利用者向け店舗ページのURLテンプレート（`{store_id}`を置換）
    pub store_url: String,
    /// 照会対象の店舗一覧
    pub stores: Vec<KyoboStore>,
    /// HTTPリクエストのタイムアウト
    pub timeout: Duration,
}

impl Default for KyoboConfig {
    fn default() -> Self {
        Self {
            url: "https://store.kyobobook.co.kr/api/stock?storeId={store_id}&isbn={isbn}"
                .to_string(),
            store_url: "https://store.kyobobook.co.kr/stores/{store_id}".to_string(),
            stores: vec![
                KyoboStore {
                    store_name: "Gangnam".to_string(),
                    store_id: 1,
                },
                KyoboStore {
                    store_name: "Gwanghwamun".to_string(),
                    store_id: 15,
                },
                KyoboStore {
                    store_name: "Jamsil".to_string(),
                    store_id: 58,
                },
            ],
            timeout: Duration::from_secs(5),
        }
    }
}

/// アラジン（HTMLクローラ）の設定
#[derive(Debug, Clone)]
pub struct AladinConfig {
    /// ISBN検索ページのURLテンプレート（`{isbn}`を置換）
    pub url: String,
    /// 相対リンクの解決に使用するベースURL
    pub base_url: String,
    /// HTTPリクエストのタイムアウト
    pub timeout: Duration,
}

impl Default for AladinConfig {
    fn default() -> Self {
        Self {
            url: "https://www.aladin.co.kr/shop/UsedShop/wuseditemall.aspx?ISBN={isbn}"
                .to_string(),
            base_url: "https://www.aladin.co.kr".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// バンディ＆ルニス（HTMLクローラ）の設定
#[derive(Debug, Clone)]
pub struct BandiConfig {
    /// 店舗在庫ページのURLテンプレート（`{isbn}`を置換）
    pub url: String,
    /// 相対リンクの解決に使用するベースURL
    pub base_url: String,
    /// HTTPリクエストのタイムアウト
    pub timeout: Duration,
}

impl Default for BandiConfig {
    fn default() -> Self {
        Self {
            url: "https://www.bandinlunis.com/front/product/storeStock.do?isbn={isbn}".to_string(),
            base_url: "https://www.bandinlunis.com".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// アプリケーション設定
///
/// プロセス起動時に一度構築し、各アダプタのコンストラクタへ渡す。
/// グローバルな参照は行わない。
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub kyobo: KyoboConfig,
    pub aladin: AladinConfig,
    pub bandi: BandiConfig,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// エンドポイントURLのみ環境変数で上書き可能。未設定の項目は既定値。
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("BOOKUP_KYOBO_URL") {
            config.kyobo.url = url;
        }
        if let Ok(url) = std::env::var("BOOKUP_ALADIN_URL") {
            config.aladin.url = url;
        }
        if let Ok(url) = std::env::var("BOOKUP_BANDI_URL") {
            config.bandi.url = url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_three_kyobo_stores() {
        let config = AppConfig::default();
        assert_eq!(config.kyobo.stores.len(), 3);
    }

    #[test]
    fn test_url_templates_contain_placeholders() {
        let config = AppConfig::default();
        assert!(config.kyobo.url.contains("{store_id}"));
        assert!(config.kyobo.url.contains("{isbn}"));
        assert!(config.aladin.url.contains("{isbn}"));
        assert!(config.bandi.url.contains("{isbn}"));
    }
}
