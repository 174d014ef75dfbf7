use uuid::Uuid;

use super::Store;
use crate::model::{BROADCAST, Message};

impl Store {
    pub async fn insert_message(
        &self,
        sender: &str,
        recipient: &str,
        text: &str,
        kind: &str,
        time: &str,
    ) -> Result<Message, sqlx::Error> {
        let id = Uuid::now_v7().to_string();
        sqlx::query("INSERT INTO messages (id,sender,recipient,text,kind,time) VALUES (?,?,?,?,?,?)")
            .bind(&id)
            .bind(sender)
            .bind(recipient)
            .bind(text)
            .bind(kind)
            .bind(time)
            .execute(&self.pool)
            .await?;
        Ok(Message {
            id,
            sender: sender.to_owned(),
            recipient: recipient.to_owned(),
            text: text.to_owned(),
            kind: kind.to_owned(),
            time: time.to_owned(),
        })
    }

    pub async fn message(&self, id: &str) -> Result<Option<Message>, sqlx::Error> {
        sqlx::query_as("SELECT id,sender,recipient,text,kind,time FROM messages WHERE id=?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Everything addressed to the room, to the viewer, or sent by the
    /// viewer, in insertion order. With a limit, only the tail: the limited
    /// query walks `rowid` backwards so the store does the windowing.
    pub async fn visible_to(
        &self,
        viewer: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Message>, sqlx::Error> {
        match limit {
            None => {
                sqlx::query_as(
                    "SELECT id,sender,recipient,text,kind,time FROM messages \
                     WHERE recipient=? OR recipient=? OR sender=? ORDER BY rowid",
                )
                .bind(BROADCAST)
                .bind(viewer)
                .bind(viewer)
                .fetch_all(&self.pool)
                .await
            }
            Some(limit) => {
                let mut tail: Vec<Message> = sqlx::query_as(
                    "SELECT id,sender,recipient,text,kind,time FROM messages \
                     WHERE recipient=? OR recipient=? OR sender=? ORDER BY rowid DESC LIMIT ?",
                )
                .bind(BROADCAST)
                .bind(viewer)
                .bind(viewer)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?;
                tail.reverse();
                Ok(tail)
            }
        }
    }

    pub async fn delete_message(&self, id: &str) -> Result<bool, sqlx::Error> {
        let deleted = sqlx::query("DELETE FROM messages WHERE id=?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(deleted.rows_affected() > 0)
    }

    pub async fn update_message(
        &self,
        id: &str,
        sender: &str,
        recipient: &str,
        text: &str,
        kind: &str,
        time: &str,
    ) -> Result<bool, sqlx::Error> {
        let updated = sqlx::query(
            "UPDATE messages SET sender=?,recipient=?,text=?,kind=?,time=? WHERE id=?",
        )
        .bind(sender)
        .bind(recipient)
        .bind(text)
        .bind(kind)
        .bind(time)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(updated.rows_affected() > 0)
    }
}
