/// Decision table shipped with the binary.
///
/// The block starts with a blank line, so the default header offset of 3
/// skips that line, the column-header row and the separator row.
pub const EMBEDDED_TABLE: &str = "
| Consideration Point                   | OPA/Gatekeeper | Kyverno | Kubewarden | JsPolicy | Weight |
|---------------------------------------|----------------|---------|------------|----------|--------|
| Security and Isolation                | 3              | 2       | 3          | 3        | 3      |
| Flexibility in Policy Development     | 3              | 2       | 3          | 3        | 3      |
| Performance Efficiency                | 2              | 2       | 3          | 2        | 3      |
| Scalability                           | 3              | 2       | 3          | 2        | 3      |
| Community and Ecosystem Growth       | 3              | 2       | 2          | 1        | 1      |
| Alignment with Organizational Practices| 2             | 3       | 3          | 3        | 3      |
| Ease of Policy Management             | 1              | 3       | 3          | 3        | 2      |
| Learning Curve                        | 1              | 3       | 3          | 3        | 2      |
| Resource Utilization                  | 2              | 2       | 2          | 2        | 3      |
| Policy Language Compatibility         | 1              | 3       | 2          | 3        | 2      |
| High Availability and Fault Tolerance | 3              | 2       | 2          | 2        | 3      |
| Integration with Existing Tools       | 3              | 3       | 3          | 2        | 3      |
| Upgrade and Maintenance Path          | 3              | 1       | 3          | 2        | 2      |
| Support and Documentation             | 3              | 2       | 2          | 2        | 2      |
| Cost Implications                     | 3              | 3       | 3          | 3        | 1      |
| Compliance and Audit Capabilities     | 3              | 3       | 3          | 2        | 3      |
| Policy Execution Transparency         | 2              | 3       | 3          | 3        | 2      |
| Testing Capapabilities\t            | 2              | 1       | 3          | 3        | 2      |
";
