// ==========================================
// 商品目录管理系统 - 配置层
// ==========================================
// 职责: 目录路径与文件名模板
// 红线: 配置在构造时显式传入，不使用全局单例
// ==========================================

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// 批量装载识别的商品文件前缀
pub const PRODUCT_FILE_PREFIX: &str = "product";

// 快照文件后缀（restore 按此后缀扫描）
pub const SNAPSHOT_SUFFIX: &str = ".tmp";

/// 目录配置
///
/// - data_dir: 批量装载扫描的数据目录
/// - reports_dir: 报表文件与逐商品评论文件所在目录
/// - temp_dir: 快照目录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub temp_dir: PathBuf,
}

impl CatalogConfig {
    /// 以统一根目录构造（data/ reports/ temp/ 三个子目录）
    pub fn with_base(base: &Path) -> Self {
        Self {
            data_dir: base.join("data"),
            reports_dir: base.join("reports"),
            temp_dir: base.join("temp"),
        }
    }

    /// 默认配置（系统数据目录下的 product-catalog/）
    pub fn default_dirs() -> Self {
        let base = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("product-catalog");
        Self::with_base(&base)
    }

    /// 从 JSON 配置文件装载
    pub fn load(path: &Path) -> Result<Self, io::Error> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    // ==========================================
    // 文件名模板
    // ==========================================

    /// 逐商品报表文件
    pub fn report_file(&self, id: i32) -> PathBuf {
        self.reports_dir.join(format!("product_report_{}.txt", id))
    }

    /// 逐商品评论文件（缺失视为无评论，不是错误）
    pub fn reviews_file(&self, id: i32) -> PathBuf {
        self.reports_dir.join(format!("reviews_{}.txt", id))
    }

    /// 快照文件（按时间戳命名）
    pub fn snapshot_file(&self, timestamp_millis: i64) -> PathBuf {
        self.temp_dir
            .join(format!("catalog_{}{}", timestamp_millis, SNAPSHOT_SUFFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_templates() {
        let config = CatalogConfig::with_base(Path::new("/tmp/pc"));
        assert_eq!(
            config.report_file(101),
            PathBuf::from("/tmp/pc/reports/product_report_101.txt")
        );
        assert_eq!(
            config.reviews_file(101),
            PathBuf::from("/tmp/pc/reports/reviews_101.txt")
        );
        assert_eq!(
            config.snapshot_file(42),
            PathBuf::from("/tmp/pc/temp/catalog_42.tmp")
        );
    }
}
