//! Snapshot tests for the OpenRouter client

#[cfg(test)]
mod snapshot_tests {
    use crate::{OpenRouterClient, OpenRouterConfig};
    use edubot_core::{ChatRole, MessageInput};
    use insta::assert_yaml_snapshot;
    use serde_json::json;

    #[test]
    fn test_config_snapshot() {
        let config = OpenRouterConfig {
            api_key: "test_api_key_redacted".to_string(),
            api_url: "https://openrouter.ai/api/v1".to_string(),
            model: "openai/gpt-4o".to_string(),
        };

        assert_yaml_snapshot!(config, @r###"
        ---
        api_key: test_api_key_redacted
        api_url: "https://openrouter.ai/api/v1"
        model: openai/gpt-4o
        "###);
    }

    #[test]
    fn test_default_model() {
        assert_eq!(OpenRouterConfig::DEFAULT_MODEL, "openai/gpt-4o");
        let config = OpenRouterConfig::new("key".to_string());
        assert_eq!(config.model, "openai/gpt-4o");
        assert_eq!(config.api_url, "https://openrouter.ai/api/v1");
    }

    #[test]
    fn test_message_mapping_preserves_order_and_roles() {
        let inputs = vec![
            MessageInput::system("You are a tutor."),
            MessageInput::from("What is osmosis?"),
            MessageInput::Tagged {
                kind: "ai".to_string(),
                content: "Osmosis is diffusion of water.".to_string(),
            },
            MessageInput::RoleContent {
                role: None,
                content: None,
            },
        ];

        let mapped = OpenRouterClient::map_messages(inputs);

        assert_eq!(mapped.len(), 4);
        assert_eq!(mapped[0].role, ChatRole::System);
        assert_eq!(mapped[1].role, ChatRole::User);
        assert_eq!(mapped[2].role, ChatRole::Assistant);
        assert_eq!(mapped[3].role, ChatRole::User);
        assert_eq!(mapped[3].content, "");
    }

    #[test]
    fn test_wire_shape() {
        let mapped = OpenRouterClient::map_messages(vec![
            MessageInput::system("Answer from context."),
            MessageInput::from("What is the powerhouse of the cell?"),
        ]);

        let encoded = serde_json::to_value(&mapped).unwrap();
        assert_eq!(
            encoded,
            json!([
                {"role": "system", "content": "Answer from context."},
                {"role": "user", "content": "What is the powerhouse of the cell?"},
            ])
        );
    }
}
