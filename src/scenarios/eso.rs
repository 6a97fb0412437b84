//! Credential injection checks for secrets delivered by the External Secrets
//! Operator: AWS, PostgreSQL and MLflow.

use crate::notebook::{Cell, NotebookSpec};

pub const AWS_CREDENTIALS: &str = "eso-integration/aws-credentials-test.ipynb";
pub const DATABASE_CONNECTION: &str = "eso-integration/database-connection-test.ipynb";
pub const MLFLOW_TRACKING: &str = "eso-integration/mlflow-tracking-test.ipynb";

pub fn aws_credentials() -> NotebookSpec {
    NotebookSpec::new(
        AWS_CREDENTIALS,
        vec![
            Cell::markdown(
                r#"# AWS Credentials Test

This notebook tests AWS credential injection via External Secrets Operator (ESO)."#,
            ),
            Cell::code(
                r#"# Import libraries
import os
import boto3
from botocore.exceptions import ClientError"#,
            ),
            Cell::code(
                r#"# Verify credentials are injected
assert 'AWS_ACCESS_KEY_ID' in os.environ, "AWS_ACCESS_KEY_ID not found"
assert 'AWS_SECRET_ACCESS_KEY' in os.environ, "AWS_SECRET_ACCESS_KEY not found"
assert 'AWS_REGION' in os.environ, "AWS_REGION not found"
print("✓ All AWS credentials found")"#,
            ),
            Cell::code(
                r#"# Test credential format
access_key = os.environ['AWS_ACCESS_KEY_ID']
assert access_key.startswith('AKIA'), f"Invalid AWS access key format: {access_key[:4]}..."
print(f"✓ AWS Access Key format valid: {access_key[:4]}...")"#,
            ),
            Cell::code(
                r#"# Test region
region = os.environ['AWS_REGION']
assert region in ['us-east-1', 'us-west-2', 'eu-west-1'], f"Unexpected region: {region}"
print(f"✓ AWS Region: {region}")"#,
            ),
            Cell::code(
                r#"# Summary
print("\n=== AWS Credentials Test Summary ===")
print("✓ All AWS credentials properly injected")
print("✓ Credential format validation passed")
print("✓ Region validation passed")"#,
            ),
        ],
    )
}

pub fn database_connection() -> NotebookSpec {
    NotebookSpec::new(
        DATABASE_CONNECTION,
        vec![
            Cell::markdown(
                r#"# Database Connection Test

This notebook tests database credential injection via ESO."#,
            ),
            Cell::code(
                r#"# Import libraries
import os
from urllib.parse import quote_plus"#,
            ),
            Cell::code(
                r#"# Verify credentials are injected
required_vars = ['DB_HOST', 'DB_PORT', 'DB_NAME', 'DB_USER', 'DB_PASSWORD']
for var in required_vars:
    assert var in os.environ, f"{var} not found"
print("✓ All database credentials found")"#,
            ),
            Cell::code(
                r#"# Build connection string
db_host = os.environ['DB_HOST']
db_port = os.environ['DB_PORT']
db_name = os.environ['DB_NAME']
db_user = os.environ['DB_USER']
db_password = os.environ['DB_PASSWORD']

connection_string = f"postgresql://{db_user}:{quote_plus(db_password)}@{db_host}:{db_port}/{db_name}"
print(f"✓ Connection string built: postgresql://{db_user}:***@{db_host}:{db_port}/{db_name}")"#,
            ),
            Cell::code(
                r#"# Test connection (mock - don't actually connect in test)
print("✓ Database credentials validated (connection test skipped in validation)")"#,
            ),
            Cell::code(
                r#"# Summary
print("\n=== Database Credentials Test Summary ===")
print("✓ All database credentials properly injected")
print("✓ Connection string format valid")"#,
            ),
        ],
    )
}

pub fn mlflow_tracking() -> NotebookSpec {
    NotebookSpec::new(
        MLFLOW_TRACKING,
        vec![
            Cell::markdown(
                r#"# MLflow Tracking Test

This notebook tests MLflow credential injection via ESO."#,
            ),
            Cell::code(
                r#"# Import libraries
import os"#,
            ),
            Cell::code(
                r#"# Verify credentials are injected
assert 'MLFLOW_TRACKING_URI' in os.environ, "MLFLOW_TRACKING_URI not found"
assert 'MLFLOW_TRACKING_USERNAME' in os.environ, "MLFLOW_TRACKING_USERNAME not found"
assert 'MLFLOW_TRACKING_PASSWORD' in os.environ, "MLFLOW_TRACKING_PASSWORD not found"
print("✓ All MLflow credentials found")"#,
            ),
            Cell::code(
                r#"# Set MLflow tracking URI
tracking_uri = os.environ['MLFLOW_TRACKING_URI']
print(f"✓ MLflow tracking URI: {tracking_uri}")"#,
            ),
            Cell::code(
                r#"# Test authentication (mock)
username = os.environ['MLFLOW_TRACKING_USERNAME']
print(f"✓ MLflow username: {username}")"#,
            ),
            Cell::code(
                r#"# Summary
print("\n=== MLflow Credentials Test Summary ===")
print("✓ All MLflow credentials properly injected")
print("✓ Tracking URI configured")"#,
            ),
        ],
    )
}
