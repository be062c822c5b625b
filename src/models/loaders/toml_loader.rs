use crate::error::{AppError, AppResult, FileError};
use crate::models::draft::QuestionDraft;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载一份题目草稿
pub async fn load_draft(toml_file_path: &Path) -> AppResult<QuestionDraft> {
    let path_str = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let draft: QuestionDraft =
        toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
            path: path_str.clone(),
            source,
        })?;

    Ok(draft.with_file_path(path_str))
}

/// 从文件夹中加载所有 TOML 草稿
///
/// 单个文件解析失败只记录警告并跳过；结果按文件名排序。
pub async fn load_all_drafts(folder_path: &str) -> AppResult<Vec<QuestionDraft>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    let mut toml_files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml_files.push(path);
        }
    }
    toml_files.sort();

    let mut drafts = Vec::with_capacity(toml_files.len());
    for path in toml_files {
        tracing::debug!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_draft(&path).await {
            Ok(draft) => drafts.push(draft),
            Err(e) => tracing::warn!("加载文件失败 {}: {}", path.display(), e),
        }
    }

    Ok(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_all_drafts_skips_broken_and_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b.toml"),
            "question = \"Q2\"\nanswer = \"A2\"\ncategory = \"2\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a.toml"),
            "question = \"Q1\"\nanswer = \"A1\"\ndifficulty = 5\ncategory = \"1\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.toml"), "question = ").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let drafts = load_all_drafts(dir.path().to_str().unwrap()).await.unwrap();

        let questions: Vec<&str> = drafts.iter().map(|d| d.question.as_str()).collect();
        assert_eq!(questions, vec!["Q1", "Q2"]);
        assert_eq!(drafts[0].difficulty, "5");
        assert!(drafts[0].file_path.as_deref().unwrap().ends_with("a.toml"));
    }

    #[tokio::test]
    async fn test_missing_folder_is_an_error() {
        let result = load_all_drafts("/definitely/not/here").await;
        assert!(matches!(
            result,
            Err(AppError::File(FileError::DirectoryNotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_load_draft_reports_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "answer = \"A\"\n").unwrap();

        let err = load_draft(&path).await.unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
