//! The fixed set of fixture notebooks.

pub mod eso;
pub mod inference;
pub mod training;

use crate::notebook::Catalog;

/// Build the catalog of all fixture notebooks, in output order.
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.push(eso::aws_credentials());
    catalog.push(eso::database_connection());
    catalog.push(eso::mlflow_tracking());
    catalog.push(inference::kserve_inference());
    catalog.push(inference::openshift_ai_sentiment());
    catalog.push(training::train_sentiment_model());
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_is_valid() {
        catalog().validate().unwrap();
    }

    #[test]
    fn catalog_paths_in_output_order() {
        let catalog = catalog();
        let paths: Vec<&str> = catalog.iter().map(|nb| nb.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "eso-integration/aws-credentials-test.ipynb",
                "eso-integration/database-connection-test.ipynb",
                "eso-integration/mlflow-tracking-test.ipynb",
                "model-validation/kserve/model-inference-kserve.ipynb",
                "model-validation/openshift-ai/sentiment-analysis-test.ipynb",
                "model-training/train-sentiment-model.ipynb",
            ]
        );
    }

    #[test]
    fn cell_counts_per_notebook() {
        let catalog = catalog();
        let expected = [
            (eso::AWS_CREDENTIALS, 1, 5),
            (eso::DATABASE_CONNECTION, 1, 5),
            (eso::MLFLOW_TRACKING, 1, 5),
            (inference::KSERVE_INFERENCE, 1, 6),
            (inference::OPENSHIFT_AI_SENTIMENT, 1, 5),
            (training::TRAIN_SENTIMENT_MODEL, 10, 12),
        ];
        for (path, markdown, code) in expected {
            let nb = catalog.get(path).unwrap();
            assert_eq!(
                (nb.markdown_count(), nb.code_count()),
                (markdown, code),
                "{path}"
            );
        }
    }

    #[test]
    fn every_notebook_opens_with_a_title() {
        for nb in &catalog() {
            let first = &nb.cells[0];
            assert!(!first.is_code(), "{}", nb.path);
            assert!(first.source().starts_with("# "), "{}", nb.path);
        }
    }
}
